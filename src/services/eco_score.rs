// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco score: daily emission mapped linearly onto 0-100.

/// Daily emission (kg) at or above which the score bottoms out.
pub const MAX_DAILY_EMISSION_KG: f64 = 20.0;

/// Score an emission total. 0 kg scores 100, 20 kg or more scores 0.
pub fn score(total_emission: f64) -> u8 {
    let raw = 100.0 - (total_emission / MAX_DAILY_EMISSION_KG) * 100.0;
    // NaN casts to 0
    raw.round().clamp(0.0, 100.0) as u8
}
