// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record storage.
//!
//! The scoring core only sees the [`ActivityStore`] trait. Failures are
//! reported as [`AppError::Persistence`] and passed through unchanged.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::error::AppError;
use crate::models::{ActivityRecord, ScoredActivity};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    pub const ACTIVITIES: &str = "activities";
}

/// Durable, ordered store of activity records.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Store a scored activity, assigning its ID and creation time.
    async fn save(&self, activity: ScoredActivity) -> Result<ActivityRecord, AppError>;

    /// All records, newest first.
    async fn find_all(&self) -> Result<Vec<ActivityRecord>, AppError>;

    /// The most recently created record, if any.
    async fn find_latest(&self) -> Result<Option<ActivityRecord>, AppError> {
        Ok(self.find_all().await?.into_iter().next())
    }
}

/// Order records newest first. ID breaks ties between records created in
/// the same microsecond, so every backend returns the same order.
pub(crate) fn sort_newest_first(records: &mut [ActivityRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Fresh record ID.
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
