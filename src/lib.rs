// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Eco Tracker: daily carbon footprint with eco scores and rewards
//!
//! This crate scores daily activity logs (travel, electricity, food,
//! lifestyle) into an emission estimate, an eco score and coin/badge
//! rewards, and serves analytics over the stored history.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod rounding;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{ActivityService, SuggestionService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub activity_service: ActivityService,
    pub suggestion_service: SuggestionService,
}
