// ABOUTME: Recommendation commands for fitfindr-cli
// ABOUTME: Runs the size engine for a chosen or detected garment and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use fitfindr::detection::{analyze_detected_item, AnalysisResult, DetectedItem, ItemContext};
use fitfindr::errors::{AppError, AppResult};
use fitfindr::history::AnalysisRecord;
use fitfindr::models::ClothingCategory;
use fitfindr::SizeRecommendationEngine;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::configured_engine;
use crate::helpers::display::{display_analysis, display_history_record};
use crate::helpers::input::{load_measurements, MeasurementArgs};

type Result<T> = AppResult<T>;

/// Recommend a size for a garment the user picked
pub fn run(
    category: ClothingCategory,
    brand: Option<&str>,
    input: &MeasurementArgs,
    json: bool,
) -> Result<()> {
    let measurements = load_measurements(input)?;
    let engine = configured_engine()?;

    let recommendation = engine.recommend(&measurements, category, brand);
    let result =
        AnalysisResult::from_manual_selection(recommendation, ItemContext::manual(category, brand));

    info!(category = %category, size = %result.size, "Recommended size");

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        display_analysis(&result);
    }
    Ok(())
}

/// Recommend a size for a garment described by detector output
pub fn analyze(
    detection: &Path,
    selected: ClothingCategory,
    user_id: Option<Uuid>,
    input: &MeasurementArgs,
    json: bool,
) -> Result<()> {
    let detected = load_detection(detection)?;
    let measurements = load_measurements(input)?;
    let engine = configured_engine()?;

    let result = analyze_detected_item(&engine, &measurements, Some(&detected), selected);
    let record = user_id.map(|user_id| AnalysisRecord::from_result(user_id, &result));

    info!(
        category = %result.category,
        size = %result.size,
        confidence = result.confidence,
        "Analyzed detected item"
    );

    if json {
        let output = json!({ "result": result, "record": record });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display_analysis(&result);
        if let Some(record) = &record {
            display_history_record(record);
        }
    }
    Ok(())
}

fn load_detection(path: &Path) -> Result<DetectedItem> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("cannot read detection {}", path.display())).with_source(e)
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::invalid_format(format!("detection is not valid JSON: {e}")).with_source(e)
    })
}
