// ABOUTME: Core types and constants for the FitFindr sizing platform
// ABOUTME: Foundation crate with error handling, measurement models, and size tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitFindr` Core
//!
//! Foundation crate providing shared types and constants for the `FitFindr`
//! size recommendation engine. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Size ladders, bracket thresholds and validation ranges
//! - **models**: Measurements, clothing categories and recommendation records
//! - **numeric**: Lenient parsing of measurement text entered in forms

/// Unified error handling system with standard error codes
pub mod errors;

/// Sizing constants organized by domain
pub mod constants;

/// Core data models (measurements, categories, recommendations)
pub mod models;

/// Lenient numeric parsing for form-entered measurement text
pub mod numeric;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    ClothingCategory, ConfidenceLevel, Gender, MeasurementField, MeasurementValidation,
    PreferredFit, SizeRecommendation, UserMeasurements,
};
