// ABOUTME: Conversation session management over an injected text generation backend
// ABOUTME: Owns ordered turn history and sends prompts with a bounded temperature
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversation Session
//!
//! Wraps a single logical dialogue with a remote generation backend reached
//! through an injected [`TextGenerator`] trait object. The session owns the
//! ordered turn history exclusively; it grows only on successful exchanges
//! and resets only on an explicit clear or (re)start.

use std::sync::Arc;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::genai::{prompts, ConversationTurn, GenerateRequest, TextGenerator};

/// Temperature used by [`ConversationSession::send_prompt`]
pub const DEFAULT_TEMPERATURE: f64 = 0.1;

/// A turn-based exchange with a remote text generation backend
///
/// The backend is injected at construction and shared via `Arc`, so the
/// caller owns its lifecycle. A freshly constructed session has an empty
/// history until [`ConversationSession::start_conversation`] is called.
pub struct ConversationSession {
    generator: Arc<dyn TextGenerator>,
    history: Vec<ConversationTurn>,
    preload: Option<Vec<ConversationTurn>>,
}

impl ConversationSession {
    /// Create a session over the given backend
    ///
    /// `preload` controls what [`ConversationSession::start_conversation`]
    /// seeds the history with: `Some(turns)` is used verbatim, `None` falls
    /// back to the default JSON-envelope priming exchange.
    #[must_use]
    pub const fn new(
        generator: Arc<dyn TextGenerator>,
        preload: Option<Vec<ConversationTurn>>,
    ) -> Self {
        Self {
            generator,
            history: Vec::new(),
            preload,
        }
    }

    /// Initialize the history from the preloaded turns
    pub fn start_conversation(&mut self) {
        self.history = self
            .preload
            .clone()
            .unwrap_or_else(prompts::default_priming_exchange);
        debug!(turns = self.history.len(), "Conversation started");
    }

    /// Reset the history to empty
    pub fn clear_conversation(&mut self) {
        self.history.clear();
    }

    /// Ordered turns exchanged so far, including any preloaded priming turns
    #[must_use]
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Send a prompt with the default temperature
    ///
    /// # Errors
    ///
    /// Same failure modes as
    /// [`ConversationSession::send_prompt_with_temperature`].
    pub async fn send_prompt(&mut self, prompt: &str) -> AppResult<String> {
        self.send_prompt_with_temperature(prompt, DEFAULT_TEMPERATURE)
            .await
    }

    /// Send a prompt with an explicit temperature
    ///
    /// The full history plus the new user turn is replayed to the backend.
    /// On success the user turn and the model's raw reply are appended to
    /// the history, and the reply is returned with a visual separator line
    /// appended. On failure the history is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the temperature is outside `[0, 1]`,
    /// `EmptyPrompt` if the prompt is empty or blank, and propagates the
    /// backend's error when the generation call fails.
    pub async fn send_prompt_with_temperature(
        &mut self,
        prompt: &str,
        temperature: f64,
    ) -> AppResult<String> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(AppError::invalid_parameter(
                "Temperature can be between 0 and 1",
            ));
        }
        if prompt.trim().is_empty() {
            return Err(AppError::empty_prompt());
        }

        let mut turns = self.history.clone();
        turns.push(ConversationTurn::user(prompt));

        let request = GenerateRequest::new(turns).with_temperature(temperature);

        debug!(
            history_turns = self.history.len(),
            backend = self.generator.name(),
            "Sending prompt"
        );

        let response = self.generator.generate(&request).await?;

        let reply = format!("{}\n{}", response.text, "___".repeat(20));

        self.history.push(ConversationTurn::user(prompt));
        self.history.push(ConversationTurn::model(response.text));

        Ok(reply)
    }
}
