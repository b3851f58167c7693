// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Coins and badge earned by a single activity.
//!
//! Tiers are exclusive: one activity earns exactly one coin amount and at
//! most one badge. Badges based on history (streaks, weekly habits) are not
//! decided here.

use std::fmt;

/// Emission below which an activity earns [`Badge::EcoChampion`].
pub const CHAMPION_THRESHOLD_KG: f64 = 4.0;
/// Emission below which an activity earns [`Badge::GreenStarter`].
pub const STARTER_THRESHOLD_KG: f64 = 6.0;

pub const CHAMPION_COINS: u32 = 20;
pub const STARTER_COINS: u32 = 10;
pub const BASE_COINS: u32 = 5;

/// Per-activity badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    EcoChampion,
    GreenStarter,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::EcoChampion => "Eco Champion",
            Badge::GreenStarter => "Green Starter",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reward for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub coins: u32,
    pub badge: Option<Badge>,
}

/// Decide the reward for an emission total.
pub fn reward(total_emission: f64) -> Reward {
    if total_emission < CHAMPION_THRESHOLD_KG {
        Reward {
            coins: CHAMPION_COINS,
            badge: Some(Badge::EcoChampion),
        }
    } else if total_emission < STARTER_THRESHOLD_KG {
        Reward {
            coins: STARTER_COINS,
            badge: Some(Badge::GreenStarter),
        }
    } else {
        Reward {
            coins: BASE_COINS,
            badge: None,
        }
    }
}
