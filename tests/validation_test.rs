// ABOUTME: Integration tests for advisory measurement validation
// ABOUTME: Checks required-field messages, range messages, and independence from sizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{full_profile, measurements};
use fitfindr::models::{ClothingCategory, Gender, MeasurementField, UserMeasurements};
use fitfindr::{calculate_size, validate_measurements};

#[test]
fn test_empty_profile_reports_three_required_fields() {
    let validation = validate_measurements(&UserMeasurements::default());
    assert!(!validation.is_valid);
    assert_eq!(
        validation.errors,
        vec![
            "Height is required",
            "Weight is required",
            "Gender is required"
        ]
    );
}

#[test]
fn test_short_height_reports_range_only() {
    let input = measurements(&[
        (MeasurementField::Height, "90"),
        (MeasurementField::Weight, "70"),
    ])
    .with_gender(Gender::Male);
    let validation = validate_measurements(&input);
    assert!(!validation.is_valid);
    assert_eq!(validation.errors, vec!["Height should be between 100-250 cm"]);
}

#[test]
fn test_full_profile_is_valid() {
    let validation = validate_measurements(&full_profile());
    assert!(validation.is_valid);
    assert!(validation.errors.is_empty());
}

#[test]
fn test_both_ranges_reported_in_order() {
    let input = measurements(&[
        (MeasurementField::Height, "300"),
        (MeasurementField::Weight, "10"),
    ])
    .with_gender(Gender::Other);
    assert_eq!(
        validate_measurements(&input).errors,
        vec![
            "Height should be between 100-250 cm",
            "Weight should be between 30-200 kg"
        ]
    );
}

#[test]
fn test_invalid_profile_still_gets_a_size() {
    let input = measurements(&[
        (MeasurementField::Height, "90"),
        (MeasurementField::Chest, "95"),
    ]);
    assert!(!validate_measurements(&input).is_valid);
    assert_eq!(
        calculate_size(&input, ClothingCategory::Shirts, None).size,
        "S"
    );
}

#[test]
fn test_validation_json_shape() {
    let value = serde_json::to_value(validate_measurements(&UserMeasurements::default())).unwrap();
    assert_eq!(value["isValid"], false);
    assert_eq!(value["errors"].as_array().unwrap().len(), 3);
}
