// ABOUTME: Integration tests for conversation session management
// ABOUTME: Covers prompt validation, history growth rules, priming, and reply formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Conversation Session Tests
//!
//! Uses the scripted in-memory generator from `common` so the session's
//! history and request-building rules can be asserted without a network.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::ScriptedGenerator;
use san_fitness_agent::errors::ErrorCode;
use san_fitness_agent::genai::{ConversationTurn, TurnRole};
use san_fitness_agent::session::{ConversationSession, DEFAULT_TEMPERATURE};

fn session_with(generator: Arc<ScriptedGenerator>) -> ConversationSession {
    let mut session = ConversationSession::new(generator, None);
    session.start_conversation();
    session
}

// ============================================================================
// Prompt Validation
// ============================================================================

#[tokio::test]
async fn test_empty_prompt_is_rejected() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));

    let error = session.send_prompt("").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::EmptyPrompt);
}

#[tokio::test]
async fn test_blank_prompt_is_rejected() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));

    let error = session.send_prompt("   \t  ").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::EmptyPrompt);
}

#[tokio::test]
async fn test_temperature_above_one_is_rejected() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));

    let error = session
        .send_prompt_with_temperature("hello", 1.5)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidParameter);
    assert_eq!(error.message, "Temperature can be between 0 and 1");
}

#[tokio::test]
async fn test_negative_temperature_is_rejected() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));

    let error = session
        .send_prompt_with_temperature("hello", -0.1)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidParameter);
}

#[tokio::test]
async fn test_temperature_bounds_are_inclusive() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));

    assert!(session.send_prompt_with_temperature("a", 0.0).await.is_ok());
    assert!(session.send_prompt_with_temperature("b", 1.0).await.is_ok());
}

#[tokio::test]
async fn test_temperature_check_precedes_prompt_check() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));

    let error = session
        .send_prompt_with_temperature("", 2.0)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidParameter);
}

// ============================================================================
// Reply Formatting and History
// ============================================================================

#[tokio::test]
async fn test_reply_carries_separator_line() {
    let generator = Arc::new(ScriptedGenerator::with_replies(["Drink more water."]));
    let mut session = session_with(generator);

    let reply = session.send_prompt("Any hydration tips?").await.unwrap();

    assert_eq!(reply, format!("Drink more water.\n{}", "_".repeat(60)));
}

#[tokio::test]
async fn test_successful_exchange_appends_two_turns() {
    let generator = Arc::new(ScriptedGenerator::with_replies(["Sure thing."]));
    let mut session = session_with(generator);
    let primed_len = session.history().len();

    session.send_prompt("Plan my rest day.").await.unwrap();

    let history = session.history();
    assert_eq!(history.len(), primed_len + 2);
    assert_eq!(history[primed_len].role, TurnRole::User);
    assert_eq!(history[primed_len].text, "Plan my rest day.");
    assert_eq!(history[primed_len + 1].role, TurnRole::Model);
    // stored model turn is the raw reply, without the separator line
    assert_eq!(history[primed_len + 1].text, "Sure thing.");
}

#[tokio::test]
async fn test_failed_exchange_leaves_history_untouched() {
    let mut session = session_with(Arc::new(ScriptedGenerator::failing()));
    let primed: Vec<ConversationTurn> = session.history().to_vec();

    let error = session.send_prompt("Plan my rest day.").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::RemoteServiceError);
    assert_eq!(session.history(), primed.as_slice());
}

#[tokio::test]
async fn test_history_accumulates_across_exchanges() {
    let generator = Arc::new(ScriptedGenerator::with_replies(["First.", "Second."]));
    let mut session = session_with(generator);
    let primed_len = session.history().len();

    session.send_prompt("one").await.unwrap();
    session.send_prompt("two").await.unwrap();

    assert_eq!(session.history().len(), primed_len + 4);
}

// ============================================================================
// Priming and Lifecycle
// ============================================================================

#[tokio::test]
async fn test_default_priming_is_a_json_envelope_exchange() {
    let mut session = ConversationSession::new(Arc::new(ScriptedGenerator::new()), None);
    assert!(session.history().is_empty());

    session.start_conversation();

    let history = session.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, TurnRole::User);
    assert!(history[0].text.contains("JSON object"));
    assert_eq!(history[1].role, TurnRole::Model);
}

#[tokio::test]
async fn test_explicit_preload_is_used_verbatim() {
    let preload = vec![
        ConversationTurn::user("You only talk about stretching."),
        ConversationTurn::model("Understood."),
        ConversationTurn::user("Good."),
    ];
    let mut session =
        ConversationSession::new(Arc::new(ScriptedGenerator::new()), Some(preload.clone()));

    session.start_conversation();

    assert_eq!(session.history(), preload.as_slice());
}

#[tokio::test]
async fn test_clear_conversation_empties_history() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut session = session_with(generator);
    session.send_prompt("hello").await.unwrap();

    session.clear_conversation();
    assert!(session.history().is_empty());

    // clearing an already-empty history is a no-op
    session.clear_conversation();
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_restart_reseeds_priming_after_clear() {
    let mut session = session_with(Arc::new(ScriptedGenerator::new()));
    session.send_prompt("hello").await.unwrap();

    session.clear_conversation();
    session.start_conversation();

    assert_eq!(session.history().len(), 2);
}

// ============================================================================
// Request Construction
// ============================================================================

#[tokio::test]
async fn test_request_replays_history_plus_new_turn() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut session = session_with(Arc::clone(&generator));
    let primed_len = session.history().len();

    session.send_prompt("What about cardio?").await.unwrap();

    let requests = generator.requests();
    assert_eq!(requests.len(), 1);
    let turns = &requests[0].turns;
    assert_eq!(turns.len(), primed_len + 1);
    assert_eq!(turns[turns.len() - 1].role, TurnRole::User);
    assert_eq!(turns[turns.len() - 1].text, "What about cardio?");
}

#[tokio::test]
async fn test_default_temperature_is_applied() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut session = session_with(Arc::clone(&generator));

    session.send_prompt("hello").await.unwrap();

    let requests = generator.requests();
    assert_eq!(requests[0].params.temperature, Some(DEFAULT_TEMPERATURE));
}

#[tokio::test]
async fn test_explicit_temperature_is_applied() {
    let generator = Arc::new(ScriptedGenerator::new());
    let mut session = session_with(Arc::clone(&generator));

    session
        .send_prompt_with_temperature("hello", 0.42)
        .await
        .unwrap();

    let requests = generator.requests();
    assert_eq!(requests[0].params.temperature, Some(0.42));
}
