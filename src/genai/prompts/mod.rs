// ABOUTME: Prompt text for SAN conversations with the system instruction loaded at compile time
// ABOUTME: Provides the persona, the default priming exchange, and the diet/recipe prompt builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prompt Templates
//!
//! Fixed prompt text for SAN conversations. The system instruction is loaded
//! at compile time from a markdown file for easy maintenance; the builder
//! functions render user-supplied profile data into the templates the model
//! expects.

use super::ConversationTurn;
use crate::intent::Goal;
use crate::metrics::DerivedMetrics;

/// SAN fitness assistant system instruction
///
/// Frames the persona: collect height, weight, and age, compute BMI, IBW,
/// and TDEE, and produce a diet plan without excessive follow-up questions.
pub const SYSTEM_INSTRUCTION: &str = include_str!("san_system.md");

/// Biometric and preference inputs collected for a diet plan request
///
/// Ephemeral: built per request from interactive answers and rendered
/// straight into the prompt. Free-text fields keep whatever the user
/// entered (lowercased where noted); nothing is normalized beyond that.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in years
    pub age: u32,
    /// Gender as entered, lowercased
    pub gender: String,
    /// Activity level menu code, kept verbatim
    pub activity_level: String,
    /// Diet preference as entered, lowercased
    pub diet_preference: String,
    /// Goal detected from the triggering input
    pub goal: Goal,
}

/// Default priming exchange used when no history is preloaded
///
/// Asks the model to wrap replies in a JSON envelope keyed `text` and
/// records its acknowledgement. This is a prompt-engineering convention
/// only; nothing in the session parses or validates the envelope.
#[must_use]
pub fn default_priming_exchange() -> Vec<ConversationTurn> {
    vec![
        ConversationTurn::user(
            "From now on, return the output as a JSON object with the key as 'text'. \
             For example: {\"text\": \"<output goes here>\"}",
        ),
        ConversationTurn::model(
            "Sure, I will return the output as a JSON object with the key as 'text'. \
             For example: {\"text\": \"Your Output\"}",
        ),
    ]
}

/// Render the diet plan prompt from a profile and its derived metrics
///
/// Produces a `User Profile:` block, a `Calculated Metrics:` block, and the
/// closing instruction naming the plan length, diet preference, and goal.
#[must_use]
pub fn diet_plan_prompt(profile: &UserProfile, metrics: &DerivedMetrics, days: u32) -> String {
    format!(
        "User Profile:\n\
         - Height: {height} cm\n\
         - Weight: {weight} kg\n\
         - Age: {age}\n\
         - Gender: {gender}\n\
         - Activity Level: {activity_level}\n\
         - Diet Preference: {diet_preference}\n\
         - Goal: {goal}\n\
         \n\
         Calculated Metrics:\n\
         - BMI: {bmi}\n\
         - BMR: {bmr} kcal/day\n\
         - TDEE: {tdee} kcal/day\n\
         \n\
         Based on the above information, create a detailed {days}-days \
         {diet_preference} diet plan for the user to achieve their goal of {goal}.",
        height = profile.height_cm,
        weight = profile.weight_kg,
        age = profile.age,
        gender = profile.gender,
        activity_level = profile.activity_level,
        diet_preference = profile.diet_preference,
        goal = profile.goal.as_str(),
        bmi = metrics.bmi,
        bmr = metrics.bmr,
        tdee = metrics.tdee,
    )
}

/// Render the recipe prompt for a dish name
#[must_use]
pub fn recipe_prompt(dish: &str) -> String {
    format!("Provide a step-by-step recipe for {dish}.")
}
