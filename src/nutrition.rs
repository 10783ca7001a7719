// ABOUTME: Nutrition facts lookup against the API Ninjas nutrition endpoint
// ABOUTME: Returns upstream HTTP failures as values so callers can inspect status and body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Lookup
//!
//! Thin HTTP collaborator for the API Ninjas nutrition endpoint. Unlike the
//! generation client, a non-success HTTP status here is NOT an error: the
//! upstream status and raw body come back as a [`NutritionResponse`] variant
//! for the caller to match on. Only transport-level failures (connection
//! refused, timeout) fail the call itself.

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::NUTRITION_API_KEY_ENV;
use crate::errors::{AppError, AppResult};

/// Base URL for the API Ninjas nutrition API
const API_BASE_URL: &str = "https://api.api-ninjas.com/v1";

/// Per-request timeout for nutrition lookups
const REQUEST_TIMEOUT: Duration = Duration::from_secs(100);

/// Outcome of a nutrition lookup
///
/// `ApiError` is a value, not an `Err`: the upstream answered, just not with
/// a success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NutritionResponse {
    /// Parsed nutrition facts, one entry per food item in the query
    Facts(Vec<FoodNutrition>),
    /// Non-success answer from the upstream API
    ApiError {
        /// HTTP status code the upstream returned
        status: u16,
        /// Raw response body text
        message: String,
    },
}

/// Nutrition facts for a single food item
///
/// The upstream serves premium-gated fields as placeholder strings on the
/// free tier; those deserialize leniently as absent rather than failing the
/// whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodNutrition {
    /// Food item name as matched by the API
    pub name: String,
    /// Calories per serving (kcal)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub calories: Option<f64>,
    /// Serving size in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub serving_size_g: Option<f64>,
    /// Total fat in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_total_g: Option<f64>,
    /// Saturated fat in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_saturated_g: Option<f64>,
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein_g: Option<f64>,
    /// Sodium in milligrams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sodium_mg: Option<f64>,
    /// Potassium in milligrams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub potassium_mg: Option<f64>,
    /// Cholesterol in milligrams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cholesterol_mg: Option<f64>,
    /// Total carbohydrates in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carbohydrates_total_g: Option<f64>,
    /// Dietary fiber in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fiber_g: Option<f64>,
    /// Sugar in grams
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sugar_g: Option<f64>,
}

/// Accept a number, a numeric string, or a premium placeholder string
///
/// Numbers and parsable numeric strings deserialize to `Some`; anything
/// else (notably "Only available for premium subscribers.") becomes `None`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => Some(value),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// API Ninjas nutrition lookup client
pub struct NutritionClient {
    api_key: String,
    client: Client,
    base_url: String,
}

impl NutritionClient {
    /// Create a new nutrition client with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            base_url: API_BASE_URL.to_owned(),
        }
    }

    /// Create a client from the `NUTRITION_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(NUTRITION_API_KEY_ENV).map_err(|_| {
            AppError::config(format!(
                "{NUTRITION_API_KEY_ENV} environment variable not set"
            ))
        })?;
        Ok(Self::new(api_key))
    }

    /// Override the API base URL (used by tests against a local server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch nutrition facts for a free-text food query
    ///
    /// # Errors
    ///
    /// Fails only on transport-level problems or an unparsable success
    /// body; an upstream non-success status is returned as
    /// [`NutritionResponse::ApiError`].
    #[instrument(skip(self))]
    pub async fn get_nutritional_info(&self, query: &str) -> AppResult<NutritionResponse> {
        let url = format!("{}/nutrition", self.base_url);

        debug!("Querying nutrition API");

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .header("X-Api-Key", &self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AppError::remote_service("nutrition", format!("request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::remote_service("nutrition", format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            warn!(status = %status, "Nutrition API returned a non-success status");
            return Ok(NutritionResponse::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let facts: Vec<FoodNutrition> = serde_json::from_str(&body).map_err(|e| {
            AppError::remote_service("nutrition", format!("unexpected response shape: {e}"))
        })?;

        Ok(NutritionResponse::Facts(facts))
    }
}

/// Manual Debug implementation to prevent API key leakage in logs
impl fmt::Debug for NutritionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NutritionClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
