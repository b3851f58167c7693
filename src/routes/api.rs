// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity, analytics, gamification and suggestion routes.

use crate::error::{AppError, Result};
use crate::models::{ActivityInput, ActivityRecord, AnalyticsSummary, GamificationStats};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const MAX_LIMIT: u32 = 500;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activity", get(get_activities).post(create_activity))
        .route("/api/analytics", get(get_analytics))
        .route("/api/gamification", get(get_gamification))
        .route("/api/suggestions", get(get_suggestions))
}

// ─── Activities ──────────────────────────────────────────────

/// Score and store one day's activity.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ActivityInput>,
) -> Result<(StatusCode, Json<ActivityRecord>)> {
    let record = state.activity_service.log_activity(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Return at most this many of the newest records
    limit: Option<u32>,
}

/// Stored activities, newest first.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<Vec<ActivityRecord>>> {
    if let Some(limit) = params.limit {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(AppError::BadRequest(format!(
                "'limit' must be between 1 and {}",
                MAX_LIMIT
            )));
        }
    }

    let mut records = state.activity_service.list_activities().await?;
    if let Some(limit) = params.limit {
        records.truncate(limit as usize);
    }

    tracing::debug!(count = records.len(), "Fetched activities");
    Ok(Json(records))
}

// ─── Aggregates ──────────────────────────────────────────────

async fn get_analytics(State(state): State<Arc<AppState>>) -> Result<Json<AnalyticsSummary>> {
    Ok(Json(state.activity_service.analytics().await?))
}

async fn get_gamification(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GamificationStats>> {
    Ok(Json(state.activity_service.gamification().await?))
}

// ─── Suggestions ─────────────────────────────────────────────

/// Suggestions for the latest activity, or a message when nothing is logged.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SuggestionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

async fn get_suggestions(State(state): State<Arc<AppState>>) -> Result<Json<SuggestionsResponse>> {
    let Some(latest) = state.activity_service.latest_activity().await? else {
        return Ok(Json(SuggestionsResponse {
            suggestions: None,
            message: Some("No data found".to_string()),
        }));
    };

    let suggestions = state.suggestion_service.generate(&latest).await;
    Ok(Json(SuggestionsResponse {
        suggestions: Some(suggestions),
        message: None,
    }))
}
