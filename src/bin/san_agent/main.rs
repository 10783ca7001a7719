// ABOUTME: SAN CLI - interactive fitness chat plus one-shot metrics and nutrition commands
// ABOUTME: Parses arguments, initializes logging, and dispatches to the command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! SAN fitness assistant command-line interface
//!
//! Usage:
//! ```bash
//! # Start the interactive chat
//! san-agent chat
//!
//! # Compute metrics without touching the network
//! san-agent metrics --height-cm 175 --weight-kg 70 --age 30 --gender male
//!
//! # Compute metrics with the Harris-Benedict equation and a loss target
//! san-agent metrics --height-cm 175 --weight-kg 70 --age 30 --gender male \
//!     --equation harris_benedict --desired-loss-kg 2
//!
//! # Look up nutrition facts
//! san-agent nutrition "1lb brisket and fries"
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use san_fitness_agent::{errors::AppResult, logging};
use std::path::PathBuf;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "san-agent",
    about = "SAN fitness assistant CLI",
    long_about = "Interactive fitness chat bot that computes health metrics and generates diet plans through Google Gemini."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Credentials file override
    #[arg(long, global = true)]
    credentials: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Start the interactive chat loop
    Chat,

    /// Compute BMI, BMR, TDEE, and IBW from biometric inputs
    Metrics {
        /// Height in centimeters
        #[arg(long)]
        height_cm: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight_kg: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender, "male" or "female"
        #[arg(long)]
        gender: String,

        /// Activity level code, 1 (sedentary) through 5 (super active)
        #[arg(long, default_value = "3")]
        activity_level: String,

        /// BMR equation, "mifflin_st_jeor" or "harris_benedict"
        #[arg(long, default_value = "mifflin_st_jeor")]
        equation: String,

        /// Also show the calorie total for losing this many kilograms
        #[arg(long)]
        desired_loss_kg: Option<f64>,
    },

    /// Look up nutrition facts for a food query
    Nutrition {
        /// Free-text food query, e.g. "1lb brisket and fries"
        query: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still takes precedence over the flag
    let log_level = if cli.verbose { "debug" } else { "info" };
    logging::LoggingConfig::from_env()
        .with_level(log_level)
        .init()?;

    info!("SAN fitness agent CLI");

    match cli.command {
        Command::Chat => {
            commands::chat::run(cli.credentials.as_deref()).await?;
        }
        Command::Metrics {
            height_cm,
            weight_kg,
            age,
            gender,
            activity_level,
            equation,
            desired_loss_kg,
        } => {
            commands::metrics::run(
                height_cm,
                weight_kg,
                age,
                &gender,
                &activity_level,
                &equation,
                desired_loss_kg,
            )?;
        }
        Command::Nutrition { query } => {
            commands::nutrition::run(cli.credentials.as_deref(), &query).await?;
        }
    }

    Ok(())
}
