// ABOUTME: Main library entry point for the SAN fitness agent
// ABOUTME: Exposes metric calculators, conversation session, intent classifier, and remote clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Zero-tolerance unsafe policy; nothing in this crate needs unsafe code.
#![deny(unsafe_code)]

//! # SAN Fitness Agent
//!
//! A command-line fitness assistant that derives standard health metrics
//! (BMI, BMR, TDEE, IBW) from biometric inputs and produces diet plans and
//! recipes through Google Gemini. A nutrition facts lookup against the
//! API Ninjas endpoint rounds out the toolkit.
//!
//! ## Architecture
//!
//! - **`metrics`**: Pure health metric calculators
//! - **`session`**: Turn-based conversation state over an injected backend
//! - **`genai`**: The `TextGenerator` trait, Gemini client, and prompt templates
//! - **`intent`**: Enumerated classification of free-text chat input
//! - **`nutrition`**: API Ninjas lookup with error-as-value semantics
//! - **`config`**: Credentials file and environment loading
//!
//! ## Example
//!
//! ```rust
//! use san_fitness_agent::errors::AppResult;
//! use san_fitness_agent::metrics::{calculate_bmi, calculate_bmr, calculate_tdee};
//!
//! fn main() -> AppResult<()> {
//!     let bmi = calculate_bmi(70.0, 175.0)?;
//!     let bmr = calculate_bmr(70.0, 175.0, 30, "male");
//!     let tdee = calculate_tdee(bmr, "3");
//!     println!("BMI {bmi}, daily energy need {tdee} kcal");
//!     Ok(())
//! }
//! ```

/// Credentials file and environment configuration
pub mod config;

/// Unified error types and result alias
pub mod errors;

/// Text generation trait, Gemini client, and prompt templates
pub mod genai;

/// Intent classification for free-text chat input
pub mod intent;

/// Tracing subscriber setup
pub mod logging;

/// Health metric calculators
pub mod metrics;

/// Nutrition facts lookup client
pub mod nutrition;

/// Conversation session management
pub mod session;
