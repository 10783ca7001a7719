// ABOUTME: One-shot metrics command for san-agent
// ABOUTME: Computes BMI, BMR, TDEE, IBW, and the optional calorie total for a loss target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use san_fitness_agent::errors::AppResult;
use san_fitness_agent::metrics::{
    calculate_calories_to_lose_weight, calculate_ibw, BmrEquation, DerivedMetrics,
};

type Result<T> = AppResult<T>;

/// Compute and display every derived metric; needs no API keys
///
/// IBW is the one metric with a strict gender requirement, so for any other
/// gender string it is shown as unavailable instead of failing the command.
pub fn run(
    height_cm: f64,
    weight_kg: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    equation: &str,
    desired_loss_kg: Option<f64>,
) -> Result<()> {
    let equation = BmrEquation::from_name(equation);
    let metrics = DerivedMetrics::compute(
        weight_kg,
        height_cm,
        age,
        gender,
        activity_level,
        equation,
    )?;

    println!("Derived Health Metrics");
    println!("{}", "=".repeat(60));
    println!("BMI: {}", metrics.bmi);
    println!("BMR ({}): {} kcal/day", equation.name(), metrics.bmr);
    println!("TDEE: {} kcal/day", metrics.tdee);

    match calculate_ibw(height_cm, gender) {
        Ok(ibw) => println!("IBW: {ibw} kg"),
        Err(error) => println!("IBW: unavailable ({error})"),
    }

    if let Some(loss_kg) = desired_loss_kg {
        let calories = calculate_calories_to_lose_weight(loss_kg);
        println!("Calorie total to lose {loss_kg} kg: {calories} kcal");
    }

    Ok(())
}
