// ABOUTME: Interactive chat loop for san-agent
// ABOUTME: Classifies input, runs the diet plan profile flow, and relays prompts to the session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use san_fitness_agent::config::Credentials;
use san_fitness_agent::errors::AppResult;
use san_fitness_agent::genai::prompts::{self, UserProfile};
use san_fitness_agent::genai::{GeminiClient, TextGenerator};
use san_fitness_agent::intent::{self, Goal, UserIntent};
use san_fitness_agent::metrics::{BmrEquation, DerivedMetrics};
use san_fitness_agent::session::ConversationSession;
use tracing::debug;

use crate::helpers;

type Result<T> = AppResult<T>;

/// Run the interactive chat loop until `quit` or end of input
///
/// Failure to load credentials or construct the client ends the run; every
/// error after that is printed as a one-line message and the loop continues.
pub async fn run(credentials_path: Option<&Path>) -> Result<()> {
    let credentials = Credentials::load(credentials_path)?;
    let generator: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::new(credentials.gemini_api_key()?));

    let mut session = ConversationSession::new(generator, None);
    session.start_conversation();

    print_banner();

    loop {
        let Some(input) = helpers::prompt_line("You: ")? else {
            break;
        };

        if input.eq_ignore_ascii_case("quit") {
            println!("Goodbye!");
            break;
        }

        match handle_input(&mut session, &input).await {
            Ok(reply) => println!("SAN: {reply}"),
            Err(error) => println!("Error: {error}"),
        }
    }

    Ok(())
}

fn print_banner() {
    println!("Welcome to SAN, your fitness chat bot. Type 'quit' to exit.");
    println!(
        "Ask for a diet plan for your goal (muscle gain, weight loss, maintain weight), \
         a recipe, or anything else."
    );
    println!("{}", "=".repeat(60));
}

async fn handle_input(session: &mut ConversationSession, input: &str) -> Result<String> {
    let user_intent = intent::classify(input);
    debug!(intent = ?user_intent, "Input classified");

    match user_intent {
        UserIntent::DietPlan { goal } => handle_diet_plan(session, goal).await,
        UserIntent::Recipe { dish } => session.send_prompt(&prompts::recipe_prompt(&dish)).await,
        UserIntent::Chat => session.send_prompt(input).await,
    }
}

/// Collect the profile interactively, echo the derived metrics, and send
/// the composed diet plan prompt
async fn handle_diet_plan(session: &mut ConversationSession, goal: Goal) -> Result<String> {
    println!("Please provide the following details:");

    let height_cm: f64 = helpers::prompt_parsed("Height (cm): ", "Height")?;
    let weight_kg: f64 = helpers::prompt_parsed("Weight (kg): ", "Weight")?;
    let age: u32 = helpers::prompt_parsed("Age: ", "Age")?;
    let gender = helpers::prompt_required("Gender (male/female): ")?.to_lowercase();
    let diet_preference =
        helpers::prompt_required("Diet Preference (veg/non veg): ")?.to_lowercase();

    helpers::print_activity_menu();
    let activity_level = helpers::prompt_required("Activity level (choose a number): ")?;
    let days: u32 = helpers::prompt_parsed("Number of days for the diet plan: ", "Days")?;

    let profile = UserProfile {
        height_cm,
        weight_kg,
        age,
        gender,
        activity_level,
        diet_preference,
        goal,
    };

    let metrics = DerivedMetrics::compute(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &profile.gender,
        &profile.activity_level,
        BmrEquation::default(),
    )?;

    helpers::display_metrics(&metrics);

    let prompt = prompts::diet_plan_prompt(&profile, &metrics, days);
    session.send_prompt(&prompt).await
}
