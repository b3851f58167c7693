// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Two-decimal rounding shared by scoring and analytics.

/// Round to 2 decimal places, half away from zero.
///
/// Values too large to scale by 100 have no fractional part and are
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Convert kilograms to whole hundredths.
///
/// Stored emissions are already rounded to 2 decimals, so this is exact for
/// them and lets sums be computed in integers. Out-of-range values saturate.
pub fn to_hundredths(value: f64) -> i128 {
    (value * 100.0).round() as i128
}

/// Convert whole hundredths back to kilograms.
pub fn from_hundredths(hundredths: i128) -> f64 {
    hundredths as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(6.800000000000001), 6.8);
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.0 / 3.0), 0.67);
    }

    #[test]
    fn test_hundredths_round_trip_for_two_decimal_values() {
        for value in [0.0, 0.1, 0.2, 4.1, 6.8, 93.75, 1234.56] {
            assert_eq!(from_hundredths(to_hundredths(value)), value);
        }
    }

    #[test]
    fn test_round2_huge_values_stay_finite() {
        assert_eq!(round2(1e308), 1e308);
        assert_eq!(round2(f64::MAX), f64::MAX);
        assert_eq!(round2(1.2e16), 1.2e16);
    }

    #[test]
    fn test_to_hundredths_saturates() {
        assert_eq!(to_hundredths(f64::INFINITY), i128::MAX);
        assert_eq!(to_hundredths(f64::NAN), 0);
        assert!(to_hundredths(f64::MAX) > 0);
    }
}
