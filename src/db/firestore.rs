// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore-backed activity store.
//!
//! Records live in the `activities` collection, one document per record,
//! keyed by record ID. Reads are ordered by `createdAt` descending.

use async_trait::async_trait;

use crate::db::{collections, new_record_id, sort_newest_first, ActivityStore};
use crate::error::AppError;
use crate::models::{ActivityRecord, ScoredActivity};
use crate::time_utils::now_rfc3339;

/// Stored field used for ordering.
const CREATED_AT_FIELD: &str = "createdAt";

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id).await.map_err(|e| {
            AppError::Persistence(format!("Failed to connect to Firestore: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Persistence(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client.as_ref().ok_or_else(|| {
            AppError::Persistence("Database not connected (offline mode)".to_string())
        })
    }

    /// Get a record by ID.
    pub async fn get_activity(&self, id: &str) -> Result<Option<ActivityRecord>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::ACTIVITIES)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))
    }

    /// Newest records first, at most `limit` of them.
    async fn query_newest(&self, limit: Option<u32>) -> Result<Vec<ActivityRecord>, AppError> {
        let query = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .order_by([(
                CREATED_AT_FIELD,
                firestore::FirestoreQueryDirection::Descending,
            )]);

        let query = match limit {
            Some(limit) => query.limit(limit),
            None => query,
        };

        query
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))
    }
}

#[async_trait]
impl ActivityStore for FirestoreDb {
    async fn save(&self, activity: ScoredActivity) -> Result<ActivityRecord, AppError> {
        let client = self.get_client()?;
        let record = ActivityRecord::new(new_record_id(), activity, now_rfc3339());

        let _: () = client
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(&record.id)
            .object(&record)
            .execute()
            .await
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<ActivityRecord>, AppError> {
        // Firestore leaves equal createdAt values in unspecified order
        let mut records = self.query_newest(None).await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn find_latest(&self) -> Result<Option<ActivityRecord>, AppError> {
        Ok(self.query_newest(Some(1)).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityInput, Assessment};

    #[tokio::test]
    async fn test_offline_mode_reports_persistence_errors() {
        let db = FirestoreDb::new_mock();
        let activity = ScoredActivity {
            input: ActivityInput::default(),
            assessment: Assessment {
                total_emission: 0.0,
                eco_score: 100,
                coins: 20,
                badge: Some("Eco Champion".to_string()),
            },
        };

        assert!(matches!(
            db.save(activity).await,
            Err(AppError::Persistence(_))
        ));
        assert!(matches!(db.find_all().await, Err(AppError::Persistence(_))));
        assert!(matches!(
            db.find_latest().await,
            Err(AppError::Persistence(_))
        ));
        assert!(matches!(
            db.get_activity("missing").await,
            Err(AppError::Persistence(_))
        ));
    }
}
