// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store failures surface to API callers unchanged.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use eco_tracker::db::FirestoreDb;
use eco_tracker::error::AppError;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

mod common;
use common::{create_test_app_with_store, get, json_body, post_json};

#[tokio::test]
async fn test_persistence_error_response() {
    let response = AppError::Persistence("disk on fire".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    // Storage details are logged, not returned
    assert_eq!(
        json_body(response).await,
        json!({ "error": "persistence_error" })
    );
}

#[tokio::test]
async fn test_bad_request_response_includes_details() {
    let response = AppError::BadRequest("nope".to_string()).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "bad_request", "details": "nope" })
    );
}

#[tokio::test]
async fn test_upstream_and_internal_error_responses() {
    let response = AppError::SuggestionApi("timeout".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        json_body(response).await,
        json!({ "error": "suggestion_error", "details": "timeout" })
    );

    let response = AppError::from(anyhow::anyhow!("boom")).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({ "error": "internal_error" }));
}

#[tokio::test]
async fn test_offline_store_fails_every_route() {
    let (app, _) = create_test_app_with_store(Arc::new(FirestoreDb::new_mock()));

    let response = app
        .clone()
        .oneshot(post_json("/api/activity", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    for uri in [
        "/api/activity",
        "/api/analytics",
        "/api/gamification",
        "/api/suggestions",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{} should fail",
            uri
        );
        assert_eq!(json_body(response).await["error"], "persistence_error");
    }
}
