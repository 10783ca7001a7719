// ABOUTME: Interactive input and output formatting helpers for san-agent
// ABOUTME: Provides stdin prompting, strict parsing, and consistent display functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use san_fitness_agent::errors::{AppError, AppResult};
use san_fitness_agent::metrics::{ActivityLevel, DerivedMetrics};
use san_fitness_agent::nutrition::{FoodNutrition, NutritionResponse};

type Result<T> = AppResult<T>;

/// Print a prompt and read one trimmed line from stdin
///
/// Returns `None` when stdin reaches end of file.
pub fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::internal(format!("failed to flush stdout: {e}")))?;

    let mut line = String::new();
    let bytes = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| AppError::internal(format!("failed to read stdin: {e}")))?;

    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Prompt for an answer that must be present
///
/// # Errors
///
/// Returns `InvalidInput` if stdin ends before an answer arrives.
pub fn prompt_required(prompt: &str) -> Result<String> {
    prompt_line(prompt)?
        .ok_or_else(|| AppError::invalid_input("input ended before the answer was provided"))
}

/// Prompt for a value and parse it strictly
///
/// # Errors
///
/// Returns `InvalidInput` when the answer does not parse as the expected
/// type; the caller aborts the current turn and the loop continues.
pub fn prompt_parsed<T: FromStr>(prompt: &str, field: &str) -> Result<T> {
    let line = prompt_required(prompt)?;
    line.parse()
        .map_err(|_| AppError::invalid_input(format!("{field} must be a number")))
}

/// Print the numbered activity level menu
pub fn print_activity_menu() {
    println!("Activity levels:");
    for level in ActivityLevel::ALL {
        println!("{}. {}", level.code(), level.label());
    }
}

/// Display derived metrics in a consistent block
pub fn display_metrics(metrics: &DerivedMetrics) {
    println!("BMI: {}", metrics.bmi);
    println!("BMR: {} kcal/day", metrics.bmr);
    println!("TDEE: {} kcal/day", metrics.tdee);
}

/// Display a nutrition lookup outcome
///
/// An upstream non-success answer is shown with its status and body; it is
/// not an error from the caller's point of view.
pub fn display_nutrition(response: &NutritionResponse) {
    match response {
        NutritionResponse::Facts(facts) if facts.is_empty() => {
            println!("No nutrition facts found for that query.");
        }
        NutritionResponse::Facts(facts) => {
            for item in facts {
                display_food_item(item);
            }
        }
        NutritionResponse::ApiError { status, message } => {
            println!("Nutrition API answered with status {status}: {message}");
        }
    }
}

fn display_food_item(item: &FoodNutrition) {
    println!("\n{}", item.name);
    println!("{}", "=".repeat(40));
    display_fact("Calories", item.calories, "kcal");
    display_fact("Serving size", item.serving_size_g, "g");
    display_fact("Total fat", item.fat_total_g, "g");
    display_fact("Saturated fat", item.fat_saturated_g, "g");
    display_fact("Protein", item.protein_g, "g");
    display_fact("Sodium", item.sodium_mg, "mg");
    display_fact("Potassium", item.potassium_mg, "mg");
    display_fact("Cholesterol", item.cholesterol_mg, "mg");
    display_fact("Carbohydrates", item.carbohydrates_total_g, "g");
    display_fact("Fiber", item.fiber_g, "g");
    display_fact("Sugar", item.sugar_g, "g");
}

fn display_fact(label: &str, value: Option<f64>, unit: &str) {
    let rendered = value.map_or_else(|| "(premium only)".to_owned(), |v| format!("{v} {unit}"));
    println!("{label}: {rendered}");
}
