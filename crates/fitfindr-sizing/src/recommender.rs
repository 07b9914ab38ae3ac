// ABOUTME: Size recommender combining confidence, size charts, and advice generation
// ABOUTME: Heuristic engine behind a trait so a learned model can replace it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Size recommendation engine
//!
//! [`SizeRecommender`] is the heuristic implementation of
//! [`SizeRecommendationEngine`]. It is stateless apart from its
//! configuration, so one instance can serve concurrent callers.

use fitfindr_core::models::{
    ClothingCategory, MeasurementValidation, SizeRecommendation, UserMeasurements,
};
use tracing::debug;

use crate::advice::{alternative_sizes, fit_notes, generate_recommendations};
use crate::config::SizingConfig;
use crate::confidence::score_confidence;
use crate::size_charts::determine_size;
use crate::validation::validate_with_ranges;

/// Trait for producing size recommendations
pub trait SizeRecommendationEngine {
    /// Recommend a size for `category`, optionally for a specific brand
    fn recommend(
        &self,
        measurements: &UserMeasurements,
        category: ClothingCategory,
        brand: Option<&str>,
    ) -> SizeRecommendation;

    /// Advisory check of the basic profile measurements
    fn validate(&self, measurements: &UserMeasurements) -> MeasurementValidation;
}

/// Heuristic size recommender with configurable thresholds
#[derive(Debug, Clone, Default)]
pub struct SizeRecommender {
    config: SizingConfig,
}

impl SizeRecommender {
    /// Create a recommender from the global (environment-aware) configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SizingConfig::global().clone(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &SizingConfig {
        &self.config
    }
}

impl SizeRecommendationEngine for SizeRecommender {
    fn recommend(
        &self,
        measurements: &UserMeasurements,
        category: ClothingCategory,
        brand: Option<&str>,
    ) -> SizeRecommendation {
        let confidence = score_confidence(measurements, category, &self.config.confidence);
        let size = determine_size(measurements, category, brand, &self.config.charts);
        let recommendations = generate_recommendations(
            measurements,
            category,
            &size,
            confidence,
            &self.config.confidence,
            &self.config.messages,
        );

        debug!(
            category = %category,
            brand = brand.unwrap_or("-"),
            size = %size,
            confidence,
            "Calculated size recommendation"
        );

        SizeRecommendation {
            alternative_sizes: alternative_sizes(&size, category),
            fit_notes: fit_notes(measurements, &self.config.messages),
            size,
            confidence,
            recommendations,
        }
    }

    fn validate(&self, measurements: &UserMeasurements) -> MeasurementValidation {
        validate_with_ranges(measurements, &self.config.validation)
    }
}
