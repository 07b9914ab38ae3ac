// ABOUTME: Resolution of detected garments into an item context and analysis result
// ABOUTME: Combines detector output with the user's selection and a size recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Garment detection results
//!
//! An image detector may report a category, a brand and a confidence in
//! `0.0..=1.0`. Any of them can be missing. The detected category wins over
//! the user's selection only when it names a known category.

use fitfindr_core::constants::{brands, history};
use fitfindr_core::models::{
    ClothingCategory, ConfidenceLevel, SizeRecommendation, UserMeasurements,
};
use fitfindr_sizing::SizeRecommendationEngine;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw output of a garment detector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedItem {
    /// Detected category name
    pub category: Option<String>,
    /// Detected brand name
    pub brand: Option<String>,
    /// Detector confidence in `0.0..=1.0`
    pub confidence: Option<f64>,
}

/// The garment a recommendation is made for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemContext {
    /// Category used for sizing
    pub category: ClothingCategory,
    /// Brand, `Generic Brand` when unknown
    pub brand: String,
    /// Display name such as `Shirts Item`
    pub item_name: String,
}

impl ItemContext {
    /// Resolve the garment from optional detector output and the user's selection
    #[must_use]
    pub fn resolve(detected: Option<&DetectedItem>, selected: ClothingCategory) -> Self {
        let category = detected
            .and_then(|item| item.category.as_deref())
            .and_then(|name| match name.parse::<ClothingCategory>() {
                Ok(category) => Some(category),
                Err(e) => {
                    debug!(error = %e, "Falling back to selected category");
                    None
                }
            })
            .unwrap_or(selected);

        let brand = detected
            .and_then(|item| item.brand.as_deref())
            .filter(|brand| !brand.is_empty());

        Self::manual(category, brand)
    }

    /// Build the context for a category the user picked by hand
    #[must_use]
    pub fn manual(category: ClothingCategory, brand: Option<&str>) -> Self {
        Self {
            category,
            brand: brand.unwrap_or(brands::GENERIC).to_owned(),
            item_name: format!("{} {}", category.display_name(), history::ITEM_SUFFIX),
        }
    }
}

/// A size recommendation for a specific garment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Recommended size label
    pub size: String,
    /// Confidence percentage after combining with the detector
    pub confidence: f64,
    /// Advice text
    pub recommendations: Vec<String>,
    /// Garment display name
    pub item_name: String,
    /// Category used for sizing
    pub category: ClothingCategory,
    /// Brand name
    pub brand: String,
    /// Neighbouring sizes worth trying
    pub alternative_sizes: Vec<String>,
    /// Fit preference notes
    pub fit_notes: Vec<String>,
}

impl AnalysisResult {
    /// Combine a recommendation with detector output
    ///
    /// The reported confidence never exceeds the detector's, scaled to a
    /// percentage. A missing detector confidence counts as zero.
    #[must_use]
    pub fn from_detection(
        recommendation: SizeRecommendation,
        item: ItemContext,
        detection_confidence: Option<f64>,
    ) -> Self {
        let detector = detection_confidence.unwrap_or(0.0) * 100.0;
        let confidence = recommendation.confidence.min(detector);
        Self::assemble(recommendation, item, confidence)
    }

    /// Wrap a recommendation for a garment chosen without a detector
    #[must_use]
    pub fn from_manual_selection(recommendation: SizeRecommendation, item: ItemContext) -> Self {
        let confidence = recommendation.confidence;
        Self::assemble(recommendation, item, confidence)
    }

    fn assemble(recommendation: SizeRecommendation, item: ItemContext, confidence: f64) -> Self {
        Self {
            size: recommendation.size,
            confidence,
            recommendations: recommendation.recommendations,
            item_name: item.item_name,
            category: item.category,
            brand: item.brand,
            alternative_sizes: recommendation.alternative_sizes,
            fit_notes: recommendation.fit_notes,
        }
    }

    /// Display label for the combined confidence
    #[must_use]
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_percentage(self.confidence)
    }
}

/// Run a recommendation for a detected garment
///
/// The detected brand is passed to the engine; the item falls back to the
/// selected category when detection is missing or unusable.
#[must_use]
pub fn analyze_detected_item<E: SizeRecommendationEngine + ?Sized>(
    engine: &E,
    measurements: &UserMeasurements,
    detected: Option<&DetectedItem>,
    selected: ClothingCategory,
) -> AnalysisResult {
    let item = ItemContext::resolve(detected, selected);
    let brand = detected.and_then(|found| found.brand.as_deref());
    let recommendation = engine.recommend(measurements, item.category, brand);
    AnalysisResult::from_detection(
        recommendation,
        item,
        detected.and_then(|found| found.confidence),
    )
}
