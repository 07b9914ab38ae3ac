// ABOUTME: FitFindr CLI - size recommendations and measurement checks from the terminal
// ABOUTME: Reads measurements from a profile file or flags and prints the engine's output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Recommend a shirt size from flags
//! fitfindr-cli recommend --category shirts --chest 98 --height 180 --weight 75
//!
//! # Recommend from a stored profile row, as JSON
//! fitfindr-cli recommend --category pants --profile profile.json --json
//!
//! # Combine garment detector output with a recommendation and a history record
//! fitfindr-cli analyze --detection detected.json --category shirts --profile profile.json --user-id <uuid>
//!
//! # Check the basic profile measurements
//! fitfindr-cli validate --height 180 --weight 75 --gender male
//!
//! # Show brand adjustments for a category
//! fitfindr-cli brands --category shoes
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fitfindr::errors::{AppError, AppResult};
use fitfindr::logging::LoggingConfig;
use fitfindr::models::ClothingCategory;
use tracing::debug;
use uuid::Uuid;

use helpers::input::MeasurementArgs;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fitfindr-cli",
    about = "FitFindr size recommendation CLI",
    long_about = "Recommend clothing sizes from body measurements and check measurement profiles."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend a size for a garment category
    Recommend {
        /// Garment category (shirts, pants, dresses, jackets, shoes, sports)
        #[arg(long)]
        category: ClothingCategory,

        /// Brand name
        #[arg(long)]
        brand: Option<String>,

        #[command(flatten)]
        input: MeasurementArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Recommend a size for a garment reported by a detector
    Analyze {
        /// Detector output as JSON (category, brand, confidence)
        #[arg(long)]
        detection: PathBuf,

        /// Category to use when the detector reports none
        #[arg(long)]
        category: ClothingCategory,

        /// Also print the history record for this user
        #[arg(long)]
        user_id: Option<Uuid>,

        #[command(flatten)]
        input: MeasurementArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Check height, weight and gender
    Validate {
        #[command(flatten)]
        input: MeasurementArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show brand size adjustments for a category
    Brands {
        /// Garment category
        #[arg(long)]
        category: ClothingCategory,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging
        .init()
        .map_err(|e| AppError::internal(format!("failed to initialize logging: {e}")))?;

    debug!("FitFindr CLI");

    match cli.command {
        Command::Recommend {
            category,
            brand,
            input,
            json,
        } => commands::recommend::run(category, brand.as_deref(), &input, json)?,
        Command::Analyze {
            detection,
            category,
            user_id,
            input,
            json,
        } => commands::recommend::analyze(&detection, category, user_id, &input, json)?,
        Command::Validate { input, json } => return commands::validate::run(&input, json),
        Command::Brands { category } => commands::brands::run(category),
    }

    Ok(ExitCode::SUCCESS)
}
