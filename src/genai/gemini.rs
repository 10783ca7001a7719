// ABOUTME: Google Gemini text generation backend via the Generative Language REST API
// ABOUTME: Implements the TextGenerator trait with fixed decoding and safety configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Google Gemini Client
//!
//! Typed REST client for the Generative Language API (`v1beta`). Conversation
//! turns are converted into the Gemini `contents` wire shape, the SAN persona
//! rides along as a `system_instruction`, and every request carries the fixed
//! decoding and safety configuration SAN ships with.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::{debug, error, instrument};

use super::{
    default_safety_settings, prompts, ConversationTurn, GenerateRequest, GenerateResponse,
    SafetySetting, TextGenerator, TokenUsage,
};
use crate::config::GEMINI_API_KEY_ENV;
use crate::errors::{AppError, AppResult};

/// Default Gemini model for SAN conversations
const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

/// Text part of a content entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

/// Generation configuration on the wire
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Client Implementation
// ============================================================================

/// Google Gemini text generation client
pub struct GeminiClient {
    api_key: String,
    client: Client,
    model: String,
    base_url: String,
    system_instruction: Option<String>,
}

impl GeminiClient {
    /// Create a new Gemini client with an API key
    ///
    /// The client starts with the default model, the production base URL, and
    /// the SAN persona as its system instruction.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
            system_instruction: Some(prompts::SYSTEM_INSTRUCTION.to_owned()),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV).map_err(|_| {
            AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
        })?;
        Ok(Self::new(api_key))
    }

    /// Set a custom model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used by tests against a local server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the system instruction, or clear it with `None`
    #[must_use]
    pub fn with_system_instruction(mut self, instruction: Option<String>) -> Self {
        self.system_instruction = instruction;
        self
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{model}:{method}?key={}",
            self.base_url, self.api_key
        )
    }

    /// Convert conversation turns to Gemini content entries
    fn convert_turns(turns: &[ConversationTurn]) -> Vec<GeminiContent> {
        turns
            .iter()
            .map(|turn| GeminiContent {
                role: Some(turn.role.as_str().to_owned()),
                parts: vec![ContentPart {
                    text: turn.text.clone(),
                }],
            })
            .collect()
    }

    /// Build a Gemini API request from a `GenerateRequest`
    fn build_gemini_request(&self, request: &GenerateRequest) -> GeminiRequest {
        let system_instruction = self.system_instruction.as_ref().map(|text| GeminiContent {
            role: None,
            parts: vec![ContentPart { text: text.clone() }],
        });

        GeminiRequest {
            contents: Self::convert_turns(&request.turns),
            system_instruction,
            generation_config: GenerationConfig {
                temperature: request.params.temperature,
                top_p: request.params.top_p,
                top_k: request.params.top_k,
                max_output_tokens: request.params.max_output_tokens,
                response_mime_type: request.params.response_mime_type.clone(),
            },
            safety_settings: default_safety_settings(),
        }
    }

    /// Extract reply text from a Gemini response
    fn extract_content(response: &GeminiResponse) -> AppResult<String> {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| AppError::remote_service("gemini", "no content in response"))
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Map an API error status to a remote service error
    ///
    /// Extracts the upstream message from the error JSON when the body parses,
    /// otherwise carries the raw body text.
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        AppError::remote_service("gemini", format!("API error ({status}): {message}"))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let url = self.build_url(&self.model, "generateContent");

        let gemini_request = self.build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| AppError::remote_service("gemini", format!("request failed: {e}")))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            AppError::remote_service("gemini", format!("failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, response = %response_text, "Failed to parse response");
                AppError::internal(format!("Failed to parse Gemini response: {e}"))
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::remote_service("gemini", error.message));
        }

        let text = Self::extract_content(&gemini_response)?;
        let usage = gemini_response
            .usage_metadata
            .as_ref()
            .map(Self::convert_usage);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());

        debug!("Successfully received Gemini response");

        Ok(GenerateResponse {
            text,
            model: self.model.clone(),
            usage,
            finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> AppResult<bool> {
        let url = format!("{}/models?key={}", self.base_url, self.api_key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::remote_service("gemini", format!("request failed: {e}")))?;

        Ok(response.status().is_success())
    }
}

/// Manual Debug implementation to prevent API key leakage in logs
impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_includes_model_and_key() {
        let client = GeminiClient::new("test-key");
        let url = client.build_url("gemini-1.5-pro-latest", "generateContent");
        assert_eq!(
            url,
            format!("{API_BASE_URL}/models/gemini-1.5-pro-latest:generateContent?key=test-key")
        );
    }

    #[test]
    fn test_convert_turns_maps_roles() {
        let turns = vec![
            ConversationTurn::user("hello"),
            ConversationTurn::model("hi there"),
        ];
        let contents = GeminiClient::convert_turns(&turns);
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let client = GeminiClient::new("super-secret-key");
        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_map_api_error_extracts_message() {
        let body = r#"{"error": {"message": "API key not valid"}}"#;
        let error = GeminiClient::map_api_error(400, body);
        assert!(error.message.contains("400"));
        assert!(error.message.contains("API key not valid"));
    }

    #[test]
    fn test_map_api_error_falls_back_to_raw_body() {
        let error = GeminiClient::map_api_error(502, "bad gateway");
        assert!(error.message.contains("502"));
        assert!(error.message.contains("bad gateway"));
    }
}
