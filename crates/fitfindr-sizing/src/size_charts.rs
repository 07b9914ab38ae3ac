// ABOUTME: Category-specific size calculators built on bracket ladders
// ABOUTME: Chest, waist, and dress-average brackets plus EU to US shoe conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Size determination
//!
//! Every calculator accepts the brand so per-brand charts can slot in later;
//! none of them uses it yet. Missing measurements fall back to a fixed
//! default size. A present but non-numeric measurement parses to NaN, fails
//! every bracket comparison and lands in the largest size.

use fitfindr_core::constants::{letter_sizes, pants, shoes};
use fitfindr_core::models::{ClothingCategory, MeasurementField, UserMeasurements};
use fitfindr_core::numeric::{format_whole_number, round_half_up};

use crate::config::SizeChartConfig;

/// Pick the ladder entry for `value` given exclusive ascending upper bounds
///
/// `ladder` has one more entry than `bounds`; values at or above the last
/// bound (and NaN) map to the last entry.
fn bracket<'a>(value: f64, bounds: &[f64], ladder: &[&'a str]) -> &'a str {
    let index = bounds
        .iter()
        .position(|bound| value < *bound)
        .unwrap_or(bounds.len());
    ladder
        .get(index)
        .or_else(|| ladder.last())
        .copied()
        .unwrap_or(letter_sizes::DEFAULT)
}

/// Dispatch to the calculator for `category`
#[must_use]
pub fn determine_size(
    measurements: &UserMeasurements,
    category: ClothingCategory,
    brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    match category {
        ClothingCategory::Shirts => shirt_size(measurements, brand, charts),
        ClothingCategory::Pants => pants_size(measurements, brand, charts),
        ClothingCategory::Dresses => dress_size(measurements, brand, charts),
        ClothingCategory::Jackets => jacket_size(measurements, brand, charts),
        ClothingCategory::Shoes => shoe_size(measurements, brand, charts),
        ClothingCategory::Sports => sports_size(measurements, brand, charts),
    }
}

/// Letter size from chest circumference; `M` when chest is missing
#[must_use]
pub fn shirt_size(
    measurements: &UserMeasurements,
    _brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    measurements
        .numeric(MeasurementField::Chest)
        .map_or(letter_sizes::DEFAULT, |chest| {
            bracket(chest, &charts.chest_bounds_cm, &letter_sizes::LADDER)
        })
        .to_owned()
}

/// Waist size in inches from waist circumference; `32` when waist is missing
#[must_use]
pub fn pants_size(
    measurements: &UserMeasurements,
    _brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    measurements
        .numeric(MeasurementField::Waist)
        .map_or(pants::DEFAULT, |waist| {
            bracket(waist, &charts.waist_bounds_cm, &pants::LADDER)
        })
        .to_owned()
}

/// Letter size from the mean of chest, waist and hip; `M` unless all three are present
#[must_use]
pub fn dress_size(
    measurements: &UserMeasurements,
    _brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    let (Some(chest), Some(waist), Some(hip)) = (
        measurements.numeric(MeasurementField::Chest),
        measurements.numeric(MeasurementField::Waist),
        measurements.numeric(MeasurementField::Hip),
    ) else {
        return letter_sizes::DEFAULT.to_owned();
    };

    let average = (chest + waist + hip) / 3.0;
    bracket(average, &charts.dress_bounds_cm, &letter_sizes::LADDER).to_owned()
}

/// Jackets follow the shirt chart
#[must_use]
pub fn jacket_size(
    measurements: &UserMeasurements,
    brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    shirt_size(measurements, brand, charts)
}

/// US size converted from the EU shoe size; `42` when the shoe size is missing
///
/// The fallback stays in EU units, unlike converted sizes.
#[must_use]
pub fn shoe_size(
    measurements: &UserMeasurements,
    _brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    let Some(eu_size) = measurements.numeric(MeasurementField::ShoeSize) else {
        return shoes::DEFAULT.to_owned();
    };

    let us_size = round_half_up((eu_size - charts.shoe_eu_offset) * charts.shoe_us_factor);
    format!("{} {}", shoes::US_PREFIX, format_whole_number(us_size))
}

/// Sports gear follows the shirt chart
#[must_use]
pub fn sports_size(
    measurements: &UserMeasurements,
    brand: Option<&str>,
    charts: &SizeChartConfig,
) -> String {
    shirt_size(measurements, brand, charts)
}
