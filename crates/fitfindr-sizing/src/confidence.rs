// ABOUTME: Heuristic confidence scoring for size recommendations
// ABOUTME: Rewards measurement completeness, penalizes missing height or weight, clamps the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Confidence scoring
//!
//! The score is a heuristic, not a statistical measure. Chest, waist and hip
//! earn the detail bonus even when they already counted towards
//! completeness, so those fields are credited twice for dresses.

use fitfindr_core::models::{ClothingCategory, MeasurementField, UserMeasurements};

use crate::config::ConfidenceConfig;

const DETAIL_FIELDS: [MeasurementField; 3] = [
    MeasurementField::Chest,
    MeasurementField::Waist,
    MeasurementField::Hip,
];

const BASIC_FIELDS: [MeasurementField; 2] = [MeasurementField::Height, MeasurementField::Weight];

/// Fraction of the category's required measurements that are present
#[must_use]
pub fn measurement_completeness(
    measurements: &UserMeasurements,
    category: ClothingCategory,
) -> f64 {
    let required = category.required_measurements();
    let available = required
        .iter()
        .filter(|field| measurements.is_present(**field))
        .count();
    available as f64 / required.len() as f64
}

/// Score how far a recommendation for `category` can be trusted
///
/// Always lies within `[config.min, config.max]`.
#[must_use]
pub fn score_confidence(
    measurements: &UserMeasurements,
    category: ClothingCategory,
    config: &ConfidenceConfig,
) -> f64 {
    let mut confidence = config.base;

    confidence += measurement_completeness(measurements, category) * config.completeness_weight;

    if DETAIL_FIELDS
        .iter()
        .all(|field| measurements.is_present(*field))
    {
        confidence += config.detail_bonus;
    }

    if !BASIC_FIELDS
        .iter()
        .all(|field| measurements.is_present(*field))
    {
        confidence -= config.missing_basics_penalty;
    }

    confidence.max(config.min).min(config.max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(measurements: &UserMeasurements, category: ClothingCategory) -> f64 {
        score_confidence(measurements, category, &ConfidenceConfig::default())
    }

    #[test]
    fn test_empty_measurements_score_35() {
        for category in ClothingCategory::ALL {
            let confidence = score(&UserMeasurements::default(), category);
            assert!(
                (confidence - 35.0).abs() < f64::EPSILON,
                "{category}: {confidence}"
            );
        }
    }

    #[test]
    fn test_complete_shirt_measurements() {
        let measurements = UserMeasurements::default()
            .with(MeasurementField::Height, "180")
            .with(MeasurementField::Weight, "75")
            .with(MeasurementField::Chest, "100")
            .with(MeasurementField::Shoulder, "46");
        assert!((score(&measurements, ClothingCategory::Shirts) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_completeness_is_fractional() {
        let measurements = UserMeasurements::default()
            .with(MeasurementField::Height, "180")
            .with(MeasurementField::Weight, "75")
            .with(MeasurementField::Chest, "100");
        // 50 + 0.75 * 30
        assert!((score(&measurements, ClothingCategory::Jackets) - 72.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detail_bonus_double_counts_for_dresses() {
        let measurements = UserMeasurements::default()
            .with(MeasurementField::Height, "165")
            .with(MeasurementField::Weight, "60")
            .with(MeasurementField::Chest, "90")
            .with(MeasurementField::Waist, "70")
            .with(MeasurementField::Hip, "95");
        // 50 + 30 + 10 = 90
        assert!((score(&measurements, ClothingCategory::Dresses) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamped_to_upper_bound() {
        let config = ConfidenceConfig {
            base: 80.0,
            ..ConfidenceConfig::default()
        };
        let measurements = UserMeasurements::default()
            .with(MeasurementField::Height, "165")
            .with(MeasurementField::Weight, "60")
            .with(MeasurementField::Chest, "90")
            .with(MeasurementField::Waist, "70")
            .with(MeasurementField::Hip, "95");
        let confidence = score_confidence(&measurements, ClothingCategory::Dresses, &config);
        assert!((confidence - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shoes_without_height_penalized() {
        let measurements = UserMeasurements::default().with(MeasurementField::ShoeSize, "43");
        // 50 + 30 - 15
        assert!((score(&measurements, ClothingCategory::Shoes) - 65.0).abs() < f64::EPSILON);
    }
}
