// ABOUTME: Shared test utilities for session and conversation flow tests
// ABOUTME: Provides a scripted in-memory TextGenerator with queued replies and a failure switch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! Shared test utilities for `san_fitness_agent`
//!
//! The scripted generator replays queued replies in order and records every
//! request it receives, so session tests can assert on the exact turns and
//! parameters sent to the backend without any network traffic.

use async_trait::async_trait;
use san_fitness_agent::errors::{AppError, AppResult};
use san_fitness_agent::genai::{GenerateRequest, GenerateResponse, TextGenerator};
use std::collections::VecDeque;
use std::sync::Mutex;

/// In-memory generator with scripted replies
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<GenerateRequest>>,
    fail: bool,
}

impl ScriptedGenerator {
    /// Generator that answers every request with a fixed reply
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Generator that answers with the given replies in order
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let generator = Self::new();
        {
            let mut queue = generator.replies.lock().unwrap();
            queue.extend(replies.into_iter().map(Into::into));
        }
        generator
    }

    /// Generator whose every call fails with a remote service error
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        self.requests.lock().unwrap().push(request.clone());

        if self.fail {
            return Err(AppError::remote_service("scripted", "scripted failure"));
        }

        let text = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "scripted reply".to_owned());

        Ok(GenerateResponse {
            text,
            model: "scripted-model".to_owned(),
            usage: None,
            finish_reason: Some("STOP".to_owned()),
        })
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(!self.fail)
    }
}
