// ABOUTME: Main library entry point for the FitFindr size recommendation tools
// ABOUTME: Re-exports the sizing engine and adds profile, detection, history, and logging support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitFindr`
//!
//! Clothing size recommendations from body measurements.
//!
//! ## Features
//!
//! - **Size engine**: category size charts, heuristic confidence and advice
//!   (re-exported from `fitfindr-sizing`)
//! - **Profiles**: decode stored profile rows into measurements
//! - **Detection**: combine garment detector output with a recommendation
//! - **History**: the record kept for each completed analysis
//! - **Logging**: structured `tracing` output configured from the environment
//!
//! ## Example
//!
//! ```rust
//! use fitfindr::models::{ClothingCategory, MeasurementField, UserMeasurements};
//! use fitfindr::calculate_size;
//!
//! let measurements = UserMeasurements::default().with(MeasurementField::Waist, "78");
//! let recommendation = calculate_size(&measurements, ClothingCategory::Pants, None);
//! assert_eq!(recommendation.size, "32");
//! assert_eq!(recommendation.alternative_sizes, vec!["30", "34"]);
//! ```

/// Garment detection results and analysis assembly
pub mod detection;

/// Analysis history records
pub mod history;

/// Logging configuration and structured logging setup
pub mod logging;

/// Stored profile rows
pub mod profile;

pub use fitfindr_core::{constants, errors, models, numeric};
pub use fitfindr_core::{AppError, AppResult, ErrorCode};
pub use fitfindr_sizing::{
    advice, brand, calculate_size, config, get_brand_size_adjustment, validate_measurements,
    SizeRecommendationEngine, SizeRecommender, SizingConfig,
};
