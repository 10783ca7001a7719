// ABOUTME: One-shot nutrition lookup command for san-agent
// ABOUTME: Queries the API Ninjas endpoint and displays facts or the upstream error answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use san_fitness_agent::config::Credentials;
use san_fitness_agent::errors::AppResult;
use san_fitness_agent::nutrition::NutritionClient;

use crate::helpers;

type Result<T> = AppResult<T>;

/// Look up nutrition facts for the query and display the outcome
pub async fn run(credentials_path: Option<&Path>, query: &str) -> Result<()> {
    let credentials = Credentials::load(credentials_path)?;
    let client = NutritionClient::new(credentials.nutrition_api_key()?);

    let response = client.get_nutritional_info(query).await?;
    helpers::display_nutrition(&response);

    Ok(())
}
