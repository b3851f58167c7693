// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity input and stored activity record.
//!
//! `ActivityInput` is what a user submits for one day. Every field is
//! optional on the wire: numbers default to 0 and flags to false, and
//! anything that cannot be read as a non-negative number is coerced to 0
//! rather than rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Travel for the day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(default, rename_all = "camelCase")]
pub struct Travel {
    /// Kilometers driven by car
    #[serde(deserialize_with = "lenient_f64")]
    pub car_km: f64,
    /// Kilometers travelled by bus
    #[serde(deserialize_with = "lenient_f64")]
    pub bus_km: f64,
    /// Whether a flight was taken
    #[serde(deserialize_with = "lenient_bool")]
    pub flight: bool,
}

/// Household electricity use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(default, rename_all = "camelCase")]
pub struct Electricity {
    /// Electricity consumed (kWh)
    #[serde(deserialize_with = "lenient_f64")]
    pub units: f64,
    /// Hours of air conditioning (recorded, not scored)
    #[serde(deserialize_with = "lenient_f64")]
    pub ac_hours: f64,
}

/// Meals eaten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(default, rename_all = "camelCase")]
pub struct Food {
    #[serde(deserialize_with = "lenient_u32")]
    pub veg_meals: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub non_veg_meals: u32,
}

/// Everything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(default, rename_all = "camelCase")]
pub struct Lifestyle {
    /// Single-use plastic items
    #[serde(deserialize_with = "lenient_u32")]
    pub plastic_usage: u32,
    /// Whether waste was recycled (recorded, not scored)
    #[serde(deserialize_with = "lenient_bool")]
    pub recycled: bool,
}

/// One day's activity as submitted by the user.
///
/// Missing groups deserialize to their defaults, so `{}` is a valid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(default)]
pub struct ActivityInput {
    #[serde(deserialize_with = "group_or_default")]
    pub travel: Travel,
    #[serde(deserialize_with = "group_or_default")]
    pub electricity: Electricity,
    #[serde(deserialize_with = "group_or_default")]
    pub food: Food,
    #[serde(deserialize_with = "group_or_default")]
    pub lifestyle: Lifestyle,
}

/// Values derived from an input at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub total_emission: f64,
    pub eco_score: u8,
    pub coins: u32,
    pub badge: Option<String>,
}

/// A scored activity that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredActivity {
    pub input: ActivityInput,
    pub assessment: Assessment,
}

/// Stored activity record.
///
/// The derived fields are written once when the record is created and are
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Record ID (also used as document ID)
    pub id: String,
    #[serde(default)]
    pub travel: Travel,
    #[serde(default)]
    pub electricity: Electricity,
    #[serde(default)]
    pub food: Food,
    #[serde(default)]
    pub lifestyle: Lifestyle,
    /// Total emission (kg CO2e, 2 decimals)
    pub total_emission: f64,
    /// Eco score in [0, 100]
    pub eco_score: u8,
    pub coins: u32,
    pub badge: Option<String>,
    /// Creation time (RFC 3339, microsecond precision)
    pub created_at: String,
}

impl ActivityRecord {
    /// Build the stored form of a scored activity.
    pub fn new(id: String, activity: ScoredActivity, created_at: String) -> Self {
        let ScoredActivity { input, assessment } = activity;
        Self {
            id,
            travel: input.travel,
            electricity: input.electricity,
            food: input.food,
            lifestyle: input.lifestyle,
            total_emission: assessment.total_emission,
            eco_score: assessment.eco_score,
            coins: assessment.coins,
            badge: assessment.badge,
            created_at,
        }
    }
}

// ─── Lenient Deserialization ─────────────────────────────────

/// Read a JSON value as a non-negative finite number, or 0.
fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    // `as` truncates toward zero and saturates at u32::MAX
    Ok(coerce_number(&value) as u32)
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// A group that is `null` or not an object falls back to its defaults.
fn group_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        serde_json::from_value(value).map_err(serde::de::Error::custom)
    } else {
        Ok(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_uses_defaults() {
        let input: ActivityInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input, ActivityInput::default());
    }

    #[test]
    fn test_camel_case_fields() {
        let input: ActivityInput = serde_json::from_value(json!({
            "travel": { "carKm": 12.5, "busKm": 3, "flight": true },
            "electricity": { "units": 4, "acHours": 2 },
            "food": { "vegMeals": 2, "nonVegMeals": 1 },
            "lifestyle": { "plasticUsage": 3, "recycled": true }
        }))
        .unwrap();

        assert_eq!(input.travel.car_km, 12.5);
        assert_eq!(input.travel.bus_km, 3.0);
        assert!(input.travel.flight);
        assert_eq!(input.electricity.ac_hours, 2.0);
        assert_eq!(input.food.non_veg_meals, 1);
        assert_eq!(input.lifestyle.plastic_usage, 3);
        assert!(input.lifestyle.recycled);
    }

    #[test]
    fn test_invalid_numbers_coerce_to_zero() {
        let input: ActivityInput = serde_json::from_value(json!({
            "travel": { "carKm": "lots", "busKm": null, "flight": "yes" },
            "electricity": { "units": -5 },
            "food": { "vegMeals": [1, 2] },
            "lifestyle": { "plasticUsage": { "count": 2 } }
        }))
        .unwrap();

        assert_eq!(input.travel.car_km, 0.0);
        assert_eq!(input.travel.bus_km, 0.0);
        assert!(!input.travel.flight);
        assert_eq!(input.electricity.units, 0.0);
        assert_eq!(input.food.veg_meals, 0);
        assert_eq!(input.lifestyle.plastic_usage, 0);
    }

    #[test]
    fn test_numeric_strings_are_accepted() {
        let input: ActivityInput = serde_json::from_value(json!({
            "travel": { "carKm": " 7.5 ", "flight": "true" },
            "food": { "vegMeals": "2" }
        }))
        .unwrap();

        assert_eq!(input.travel.car_km, 7.5);
        assert!(input.travel.flight);
        assert_eq!(input.food.veg_meals, 2);
    }

    #[test]
    fn test_fractional_meals_truncate() {
        let input: ActivityInput =
            serde_json::from_value(json!({ "food": { "vegMeals": 2.9, "nonVegMeals": 1e12 } }))
                .unwrap();

        assert_eq!(input.food.veg_meals, 2);
        assert_eq!(input.food.non_veg_meals, u32::MAX);
    }

    #[test]
    fn test_null_group_uses_defaults() {
        let input: ActivityInput =
            serde_json::from_value(json!({ "travel": null, "food": "none" })).unwrap();

        assert_eq!(input.travel, Travel::default());
        assert_eq!(input.food, Food::default());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ActivityRecord::new(
            "abc".to_string(),
            ScoredActivity {
                input: ActivityInput::default(),
                assessment: Assessment {
                    total_emission: 0.0,
                    eco_score: 100,
                    coins: 20,
                    badge: Some("Eco Champion".to_string()),
                },
            },
            "2026-01-01T00:00:00.000000Z".to_string(),
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["totalEmission"], json!(0.0));
        assert_eq!(value["ecoScore"], json!(100));
        assert_eq!(value["badge"], json!("Eco Champion"));
        assert_eq!(value["createdAt"], json!("2026-01-01T00:00:00.000000Z"));
        assert_eq!(value["travel"]["carKm"], json!(0.0));
    }
}
