// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process activity store.

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use crate::db::{new_record_id, sort_newest_first, ActivityStore};
use crate::error::AppError;
use crate::models::{ActivityRecord, ScoredActivity};
use crate::time_utils::now_rfc3339;

/// Records keyed by ID. Ordering is applied on read.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<DashMap<String, ActivityRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-built record as-is (for seeding and tests).
    pub fn insert(&self, record: ActivityRecord) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ActivityStore for MemoryStore {
    async fn save(&self, activity: ScoredActivity) -> Result<ActivityRecord, AppError> {
        let record = ActivityRecord::new(new_record_id(), activity, now_rfc3339());
        self.insert(record.clone());
        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<ActivityRecord>, AppError> {
        let mut records: Vec<ActivityRecord> =
            self.records.iter().map(|entry| entry.value().clone()).collect();

        sort_newest_first(&mut records);
        Ok(records)
    }
}
