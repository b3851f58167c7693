// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gamification ledger: coins and badges earned across all activities.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityRecord;

/// Cumulative rewards for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct GamificationStats {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_coins: u64,
    /// Distinct badges in the order they first appear in the input.
    ///
    /// Records are read newest first, so the most recently earned badge
    /// comes first.
    pub badges: Vec<String>,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_days: u64,
}

/// Running state for [`GamificationStats`].
#[derive(Debug, Clone, Default)]
pub struct LedgerAccumulator {
    coins: u64,
    days: u64,
    badges: Vec<String>,
    seen: HashSet<String>,
}

impl LedgerAccumulator {
    /// Add one record.
    pub fn push(&mut self, record: &ActivityRecord) {
        self.coins = self.coins.saturating_add(u64::from(record.coins));
        self.days = self.days.saturating_add(1);
        if let Some(badge) = &record.badge {
            self.add_badge(badge);
        }
    }

    /// Combine two partial folds. Badges from `self` keep their position
    /// ahead of any new ones from `other`.
    pub fn merge(mut self, other: Self) -> Self {
        self.coins = self.coins.saturating_add(other.coins);
        self.days = self.days.saturating_add(other.days);
        for badge in &other.badges {
            self.add_badge(badge);
        }
        self
    }

    pub fn finish(self) -> GamificationStats {
        GamificationStats {
            total_coins: self.coins,
            badges: self.badges,
            total_days: self.days,
        }
    }

    fn add_badge(&mut self, badge: &str) {
        if self.seen.insert(badge.to_string()) {
            self.badges.push(badge.to_string());
        }
    }
}

/// Fold a record collection into [`GamificationStats`].
pub fn ledger<'a, I>(records: I) -> GamificationStats
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    records
        .into_iter()
        .fold(LedgerAccumulator::default(), |mut acc, record| {
            acc.push(record);
            acc
        })
        .finish()
}
