// ABOUTME: Advisory validation of basic profile measurements
// ABOUTME: Reports missing height, weight, gender and implausible height or weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation never blocks a size calculation; callers decide what to do
//! with the collected messages.

use fitfindr_core::models::{MeasurementField, MeasurementValidation, UserMeasurements};
use fitfindr_core::numeric::format_whole_number;

use crate::config::ValidationRanges;

/// Check presence of height, weight and gender, then plausibility of height and weight
///
/// Messages are collected in a fixed order: missing height, missing weight,
/// missing gender, height range, weight range. A non-numeric value is not a
/// range error.
#[must_use]
pub fn validate_with_ranges(
    measurements: &UserMeasurements,
    ranges: &ValidationRanges,
) -> MeasurementValidation {
    let mut errors = Vec::new();

    if !measurements.is_present(MeasurementField::Height) {
        errors.push("Height is required".to_owned());
    }
    if !measurements.is_present(MeasurementField::Weight) {
        errors.push("Weight is required".to_owned());
    }
    if measurements.gender.is_none() {
        errors.push("Gender is required".to_owned());
    }

    if let Some(height) = measurements.numeric(MeasurementField::Height) {
        if height < ranges.height_min_cm || height > ranges.height_max_cm {
            errors.push(format!(
                "Height should be between {}-{} cm",
                format_whole_number(ranges.height_min_cm),
                format_whole_number(ranges.height_max_cm)
            ));
        }
    }

    if let Some(weight) = measurements.numeric(MeasurementField::Weight) {
        if weight < ranges.weight_min_kg || weight > ranges.weight_max_kg {
            errors.push(format!(
                "Weight should be between {}-{} kg",
                format_whole_number(ranges.weight_min_kg),
                format_whole_number(ranges.weight_max_kg)
            ));
        }
    }

    MeasurementValidation::from_errors(errors)
}

/// Validate against the default plausibility ranges
#[must_use]
pub fn validate_measurements(measurements: &UserMeasurements) -> MeasurementValidation {
    validate_with_ranges(measurements, &ValidationRanges::default())
}
