// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod analytics;
pub mod gamification;

pub use activity::{ActivityInput, ActivityRecord, Assessment, ScoredActivity};
pub use analytics::{summarize, AnalyticsAccumulator, AnalyticsSummary};
pub use gamification::{ledger, GamificationStats, LedgerAccumulator};
