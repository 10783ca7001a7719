// ABOUTME: Text generation abstraction layer for pluggable AI model integration
// ABOUTME: Defines the contract for generation backends (Gemini, etc.) plus shared request types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Generation Service Provider Interface
//!
//! This module defines the contract that generation backends must implement to
//! power SAN conversations. Session logic depends only on the [`TextGenerator`]
//! trait, so backends can be swapped without touching conversation handling.
//!
//! ## Key Concepts
//!
//! - **`ConversationTurn`**: Role-based turn structure for multi-turn history
//! - **`GenerationParams`**: Decoding configuration (temperature, `top_p`, etc.)
//! - **`GenerateRequest`**: Full request carrying history and parameters
//! - **`TextGenerator`**: Async trait for producing a model reply
//!
//! ## Example: Using a Generator
//!
//! ```rust,no_run
//! use san_fitness_agent::genai::{ConversationTurn, GenerateRequest, TextGenerator};
//!
//! async fn example(generator: &dyn TextGenerator) {
//!     let turns = vec![ConversationTurn::user("Suggest a good warm-up routine.")];
//!
//!     let request = GenerateRequest::new(turns);
//!     let response = generator.generate(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

// ============================================================================
// Conversation Types
// ============================================================================

/// Role of a turn in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Turn authored by the end user
    User,
    /// Turn authored by the model
    Model,
}

impl TurnRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// A single turn in a multi-turn conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Role of the turn author
    pub role: TurnRole,
    /// Text content of the turn
    pub text: String,
}

impl ConversationTurn {
    /// Create a new conversation turn
    #[must_use]
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Create a user turn
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Create a model turn
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Model, text)
    }
}

// ============================================================================
// Generation Parameters
// ============================================================================

/// Decoding configuration for a generation request
///
/// Defaults match the fixed configuration SAN ships with. Only the
/// temperature varies per request; the remaining knobs stay pinned so
/// responses keep a consistent shape across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Temperature for response randomness (0.0 - 1.0)
    pub temperature: Option<f64>,
    /// Nucleus sampling cutoff
    pub top_p: f64,
    /// Top-k sampling cutoff
    pub top_k: u32,
    /// Maximum tokens to generate
    pub max_output_tokens: u32,
    /// MIME type requested for the response body
    pub response_mime_type: String,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: None,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 8192,
            response_mime_type: "text/plain".to_owned(),
        }
    }
}

impl GenerationParams {
    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

// ============================================================================
// Safety Settings
// ============================================================================

/// Harm category recognized by the generation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    /// Harassment content
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    /// Hate speech content
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    /// Sexually explicit content
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    /// Dangerous content
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Blocking threshold applied to a harm category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockThreshold {
    /// Block only responses with a high probability of harm
    #[serde(rename = "BLOCK_ONLY_HIGH")]
    BlockOnlyHigh,
}

/// A harm category paired with its blocking threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Harm category this setting applies to
    pub category: HarmCategory,
    /// Threshold above which responses are blocked
    pub threshold: BlockThreshold,
}

/// Safety settings SAN applies to every request
///
/// All four standard harm categories are blocked only at high confidence,
/// keeping fitness and nutrition advice flowing while filtering the worst.
#[must_use]
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting {
        category,
        threshold: BlockThreshold::BlockOnlyHigh,
    })
    .collect()
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Conversation turns, oldest first, ending with the newest user turn
    pub turns: Vec<ConversationTurn>,
    /// Decoding parameters for this request
    pub params: GenerationParams,
}

impl GenerateRequest {
    /// Create a new generation request with default parameters
    #[must_use]
    pub fn new(turns: Vec<ConversationTurn>) -> Self {
        Self {
            turns,
            params: GenerationParams::default(),
        }
    }

    /// Replace the decoding parameters
    #[must_use]
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Set the temperature, keeping the remaining parameters at their defaults
    #[must_use]
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.params.temperature = Some(temperature);
        self
    }
}

/// Response from a text generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated reply text
    pub text: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (stop, length, etc.)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Generator Trait
// ============================================================================

/// Text generation trait for conversation backends
///
/// Implement this trait to plug a new generation backend into SAN.
/// The design follows the async trait pattern for compatibility
/// with tokio-based async runtime.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Unique backend identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Default model to use if not configured otherwise
    fn default_model(&self) -> &str;

    /// Produce a reply for the given conversation
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse>;

    /// Check if the backend is reachable and the API key is valid
    async fn health_check(&self) -> AppResult<bool>;
}
