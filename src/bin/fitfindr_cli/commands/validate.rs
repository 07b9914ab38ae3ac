// ABOUTME: Measurement validation command for fitfindr-cli
// ABOUTME: Prints advisory validation messages and exits non-zero when any are found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::process::ExitCode;

use fitfindr::errors::AppResult;
use fitfindr::SizeRecommendationEngine;
use tracing::info;

use super::configured_engine;
use crate::helpers::display::display_validation;
use crate::helpers::input::{load_measurements, MeasurementArgs};

/// Validate the basic profile measurements
pub fn run(input: &MeasurementArgs, json: bool) -> AppResult<ExitCode> {
    let measurements = load_measurements(input)?;
    let validation = configured_engine()?.validate(&measurements);

    info!(
        valid = validation.is_valid,
        errors = validation.errors.len(),
        "Validated measurements"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&validation)?);
    } else {
        display_validation(&validation);
    }

    Ok(if validation.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
