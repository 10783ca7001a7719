// ABOUTME: Unified error handling for the SAN fitness agent
// ABOUTME: Defines error codes, the AppError type, and convenience constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Central error type shared by the metric calculators, the conversation
//! session, and both remote clients. Every fallible operation in the crate
//! returns [`AppResult`].

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Out-of-range or unparsable numeric input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Unrecognized gender string where a strict match is required
    #[serde(rename = "INVALID_GENDER")]
    InvalidGender = 3001,
    /// Generation parameter outside its documented range
    #[serde(rename = "INVALID_PARAMETER")]
    InvalidParameter = 3002,
    /// Empty or blank prompt
    #[serde(rename = "EMPTY_PROMPT")]
    EmptyPrompt = 3003,

    // External services (5000-5999)
    /// Transport or API failure from a remote collaborator
    #[serde(rename = "REMOTE_SERVICE_ERROR")]
    RemoteServiceError = 5000,

    // Configuration (6000-6999)
    /// Missing or malformed configuration
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidGender => "The provided gender is not recognized",
            Self::InvalidParameter => "The provided parameter is outside the acceptable range",
            Self::EmptyPrompt => "The prompt is empty",
            Self::RemoteServiceError => "A remote service encountered an error",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid numeric input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Unrecognized gender string
    pub fn invalid_gender(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidGender, message)
    }

    /// Parameter outside its documented range
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, message)
    }

    /// Empty or blank prompt
    #[must_use]
    pub fn empty_prompt() -> Self {
        Self::new(ErrorCode::EmptyPrompt, "Prompt cannot be empty")
    }

    /// Remote service failure, prefixed with the service name
    pub fn remote_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::RemoteServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Transport-level failures from either remote client surface as remote
/// service errors rather than internal ones.
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(ErrorCode::RemoteServiceError, error.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string())
    }
}
