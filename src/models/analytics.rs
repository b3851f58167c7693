// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary analytics over the full activity history.
//!
//! Recomputed on every query from the stored records; nothing here is
//! persisted.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityRecord;
use crate::rounding::{from_hundredths, to_hundredths};

/// Emission and coin totals across all tracked days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    /// Sum of all record emissions (kg, 2 decimals)
    pub total_emission: f64,
    /// Mean emission per record (kg, 2 decimals), 0 when empty
    pub average_emission: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_coins: u64,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub days_tracked: u64,
}

/// Running totals for [`AnalyticsSummary`].
///
/// Emission is kept in integer hundredths so that `push` and `merge` are
/// exactly associative and commutative. All counters saturate rather than
/// overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticsAccumulator {
    emission_hundredths: i128,
    coins: u64,
    records: u64,
}

impl AnalyticsAccumulator {
    /// Add one record.
    pub fn push(&mut self, record: &ActivityRecord) {
        self.emission_hundredths = self
            .emission_hundredths
            .saturating_add(to_hundredths(record.total_emission));
        self.coins = self.coins.saturating_add(u64::from(record.coins));
        self.records = self.records.saturating_add(1);
    }

    /// Combine two partial folds.
    pub fn merge(self, other: Self) -> Self {
        Self {
            emission_hundredths: self
                .emission_hundredths
                .saturating_add(other.emission_hundredths),
            coins: self.coins.saturating_add(other.coins),
            records: self.records.saturating_add(other.records),
        }
    }

    pub fn finish(self) -> AnalyticsSummary {
        let average_emission = if self.records > 0 {
            (self.emission_hundredths as f64 / self.records as f64).round() / 100.0
        } else {
            0.0
        };

        AnalyticsSummary {
            total_emission: from_hundredths(self.emission_hundredths),
            average_emission,
            total_coins: self.coins,
            days_tracked: self.records,
        }
    }
}

/// Fold a record collection into an [`AnalyticsSummary`].
pub fn summarize<'a, I>(records: I) -> AnalyticsSummary
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    records
        .into_iter()
        .fold(AnalyticsAccumulator::default(), |mut acc, record| {
            acc.push(record);
            acc
        })
        .finish()
}
