// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Carbon emission estimate for one day of activity.
//!
//! Fixed per-unit factors (kg CO2e), summed with no interaction terms.

use crate::models::ActivityInput;
use crate::rounding::round2;

/// Car travel, per km.
pub const CAR_KG_PER_KM: f64 = 0.12;
/// Bus travel, per km.
pub const BUS_KG_PER_KM: f64 = 0.04;
/// Flat amount for any flight taken that day.
pub const FLIGHT_KG: f64 = 90.0;
/// Grid electricity, per kWh.
pub const ELECTRICITY_KG_PER_UNIT: f64 = 0.82;
pub const VEG_MEAL_KG: f64 = 1.5;
pub const NON_VEG_MEAL_KG: f64 = 6.0;
/// Single-use plastic, per item.
pub const PLASTIC_KG_PER_ITEM: f64 = 0.5;

/// Unrounded emission per activity group.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmissionBreakdown {
    pub travel: f64,
    pub electricity: f64,
    pub food: f64,
    pub lifestyle: f64,
}

impl EmissionBreakdown {
    pub fn total(&self) -> f64 {
        self.travel + self.electricity + self.food + self.lifestyle
    }
}

/// Per-group emission for an input.
pub fn breakdown(input: &ActivityInput) -> EmissionBreakdown {
    let travel = &input.travel;
    let flight = if travel.flight { FLIGHT_KG } else { 0.0 };

    EmissionBreakdown {
        travel: travel.car_km * CAR_KG_PER_KM + travel.bus_km * BUS_KG_PER_KM + flight,
        electricity: input.electricity.units * ELECTRICITY_KG_PER_UNIT,
        food: f64::from(input.food.veg_meals) * VEG_MEAL_KG
            + f64::from(input.food.non_veg_meals) * NON_VEG_MEAL_KG,
        lifestyle: f64::from(input.lifestyle.plastic_usage) * PLASTIC_KG_PER_ITEM,
    }
}

/// Total emission for an input (kg CO2e, 2 decimals).
pub fn compute(input: &ActivityInput) -> f64 {
    round2(breakdown(input).total())
}
