// ABOUTME: Size recommendation engine for the FitFindr platform
// ABOUTME: Confidence scoring, size charts, advice text, validation, and brand adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `FitFindr` Sizing
//!
//! Maps body measurements and a garment category to a recommended size, a
//! heuristic confidence score, alternative sizes and advice text.
//!
//! The engine never fails: missing or malformed measurements fall back to
//! per-category default sizes and lower confidence. All operations are pure
//! and synchronous.
//!
//! ```rust
//! use fitfindr_core::models::{ClothingCategory, MeasurementField, UserMeasurements};
//! use fitfindr_sizing::calculate_size;
//!
//! let measurements = UserMeasurements::default().with(MeasurementField::Chest, "95");
//! let recommendation = calculate_size(&measurements, ClothingCategory::Shirts, None);
//! assert_eq!(recommendation.size, "S");
//! assert_eq!(recommendation.alternative_sizes, vec!["XS", "M"]);
//! ```

/// Advice text, alternative sizes and fit notes
pub mod advice;
/// Brand size adjustment table
pub mod brand;
/// Heuristic confidence scoring
pub mod confidence;
/// Sizing configuration with environment overrides
pub mod config;
/// Size recommender and its engine trait
pub mod recommender;
/// Category size calculators
pub mod size_charts;
/// Advisory measurement validation
pub mod validation;

use std::sync::OnceLock;

use fitfindr_core::models::{ClothingCategory, SizeRecommendation, UserMeasurements};

pub use brand::{get_brand_size_adjustment, BrandAdjustments, BRAND_ADJUSTMENTS};
pub use config::{ConfigError, SizingConfig};
pub use recommender::{SizeRecommendationEngine, SizeRecommender};
pub use validation::validate_measurements;

/// Recommender with built-in defaults, unaffected by environment overrides
static DEFAULT_RECOMMENDER: OnceLock<SizeRecommender> = OnceLock::new();

/// Recommend a size using the built-in sizing tables
///
/// Identical inputs always produce identical output.
#[must_use]
pub fn calculate_size(
    measurements: &UserMeasurements,
    category: ClothingCategory,
    brand: Option<&str>,
) -> SizeRecommendation {
    DEFAULT_RECOMMENDER
        .get_or_init(SizeRecommender::default)
        .recommend(measurements, category, brand)
}
