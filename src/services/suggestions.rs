// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Personalized reduction tips from the Gemini text-generation API.
//!
//! Best effort only: any failure is logged and replaced with a fixed
//! fallback message, never returned to the caller.

use crate::config::Config;
use crate::error::AppError;
use crate::models::ActivityRecord;
use serde::{Deserialize, Serialize};

/// Returned whenever suggestions cannot be generated.
pub const FALLBACK_SUGGESTION: &str = "Suggestion service unavailable.";

/// Gemini API client.
#[derive(Clone)]
pub struct SuggestionService {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl SuggestionService {
    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
            api_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
        )
    }

    /// Generate suggestions for a record, or the fallback message.
    pub async fn generate(&self, record: &ActivityRecord) -> String {
        match self.request_suggestions(record).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, record_id = %record.id, "Suggestion generation failed");
                FALLBACK_SUGGESTION.to_string()
            }
        }
    }

    async fn request_suggestions(&self, record: &ActivityRecord) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::SuggestionApi("GEMINI_API_KEY not configured".to_string()))?;

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": build_prompt(record) }]
            }]
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::SuggestionApi(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::SuggestionApi(format!(
                "Gemini returned {}: {}",
                status, text
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                AppError::SuggestionApi(format!("Invalid response body: {}", e.without_url()))
            })?;

        parsed
            .first_text()
            .ok_or_else(|| AppError::SuggestionApi("Response contained no text".to_string()))
    }
}

/// Build the prompt for one day's record.
pub fn build_prompt(record: &ActivityRecord) -> String {
    format!(
        "User emitted {} kg CO2 today.\n\
         Eco Score: {}.\n\
         \n\
         Breakdown:\n\
         Travel: {}\n\
         Electricity: {}\n\
         Food: {}\n\
         Lifestyle: {}\n\
         \n\
         Provide 5 short, practical, personalized suggestions to reduce carbon footprint.\n\
         Keep it clear and actionable.\n",
        record.total_emission,
        record.eco_score,
        json(&record.travel),
        json(&record.electricity),
        json(&record.food),
        json(&record.lifestyle),
    )
}

fn json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
