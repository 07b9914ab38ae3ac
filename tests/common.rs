// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides measurement builders and profile fixtures used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitfindr`

use std::io::Write;

use fitfindr::models::{Gender, MeasurementField, PreferredFit, UserMeasurements};
use tempfile::NamedTempFile;

/// Measurements built from `(field, value)` pairs
pub fn measurements(fields: &[(MeasurementField, &str)]) -> UserMeasurements {
    fields
        .iter()
        .fold(UserMeasurements::default(), |acc, (field, value)| {
            acc.with(*field, *value)
        })
}

/// A complete profile for a medium-build adult
pub fn full_profile() -> UserMeasurements {
    measurements(&[
        (MeasurementField::Height, "178"),
        (MeasurementField::Weight, "74"),
        (MeasurementField::Age, "31"),
        (MeasurementField::Chest, "101"),
        (MeasurementField::Shoulder, "46"),
        (MeasurementField::Sleeve, "63"),
        (MeasurementField::Neck, "39"),
        (MeasurementField::Waist, "82"),
        (MeasurementField::Hip, "98"),
        (MeasurementField::Inseam, "81"),
        (MeasurementField::Thigh, "56"),
        (MeasurementField::ShoeSize, "43"),
    ])
    .with_gender(Gender::Male)
    .with_preferred_fit(PreferredFit::Regular)
}

/// Write `contents` to a temporary JSON file kept alive by the returned handle
pub fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
