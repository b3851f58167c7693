// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod carbon;
pub mod eco_score;
pub mod rewards;
pub mod suggestions;

pub use activity::{assess, ActivityService};
pub use rewards::{Badge, Reward};
pub use suggestions::SuggestionService;
