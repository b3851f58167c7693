// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity scoring and logging.
//!
//! Handles the core workflow:
//! 1. Estimate emission from the submitted input
//! 2. Derive eco score and reward from the emission
//! 3. Hand the scored activity to the store
//! 4. Fold stored history into analytics and the gamification ledger

use std::sync::Arc;

use crate::db::ActivityStore;
use crate::error::Result;
use crate::models::{
    ledger, summarize, ActivityInput, ActivityRecord, AnalyticsSummary, Assessment,
    GamificationStats, ScoredActivity,
};
use crate::services::{carbon, eco_score, rewards};

/// Derive emission, score and reward for an input.
///
/// Pure; eco score and reward depend only on the emission.
pub fn assess(input: &ActivityInput) -> Assessment {
    let total_emission = carbon::compute(input);
    let reward = rewards::reward(total_emission);

    Assessment {
        total_emission,
        eco_score: eco_score::score(total_emission),
        coins: reward.coins,
        badge: reward.badge.map(|b| b.as_str().to_string()),
    }
}

/// Scores activities and reads history back from the store.
#[derive(Clone)]
pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    /// Score an input and store it. Store errors are returned unchanged.
    pub async fn log_activity(&self, input: ActivityInput) -> Result<ActivityRecord> {
        let assessment = assess(&input);

        tracing::info!(
            emission = assessment.total_emission,
            eco_score = assessment.eco_score,
            coins = assessment.coins,
            badge = ?assessment.badge,
            "Scored activity"
        );

        let record = self
            .store
            .save(ScoredActivity { input, assessment })
            .await?;

        tracing::debug!(id = %record.id, created_at = %record.created_at, "Activity stored");
        Ok(record)
    }

    /// All records, newest first.
    pub async fn list_activities(&self) -> Result<Vec<ActivityRecord>> {
        self.store.find_all().await
    }

    pub async fn latest_activity(&self) -> Result<Option<ActivityRecord>> {
        self.store.find_latest().await
    }

    pub async fn analytics(&self) -> Result<AnalyticsSummary> {
        let records = self.store.find_all().await?;
        let summary = summarize(&records);
        tracing::debug!(records = records.len(), "Computed analytics summary");
        Ok(summary)
    }

    pub async fn gamification(&self) -> Result<GamificationStats> {
        let records = self.store.find_all().await?;
        let stats = ledger(&records);
        tracing::debug!(
            records = records.len(),
            badges = stats.badges.len(),
            "Computed gamification ledger"
        );
        Ok(stats)
    }
}
