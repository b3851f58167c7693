// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Eco Tracker API Server
//!
//! Scores daily activity logs and serves analytics and rewards for the
//! dashboard.

use eco_tracker::{
    config::{Config, StorageBackend},
    db::{ActivityStore, FirestoreDb, MemoryStore},
    services::{ActivityService, SuggestionService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Eco Tracker API");

    // Initialize activity storage
    let store: Arc<dyn ActivityStore> = match &config.storage {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; records are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StorageBackend::Firestore { project_id } => Arc::new(FirestoreDb::new(project_id).await?),
    };

    let suggestion_service = SuggestionService::from_config(&config);
    tracing::info!(
        model = %config.gemini_model,
        enabled = config.gemini_api_key.is_some(),
        "Suggestion service initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        activity_service: ActivityService::new(store),
        suggestion_service,
    });

    // Build router
    let app = eco_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("eco_tracker=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
