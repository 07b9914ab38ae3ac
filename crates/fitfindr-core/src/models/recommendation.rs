// ABOUTME: Output records of the sizing engine and measurement validation
// ABOUTME: Size recommendation, validation outcome, and confidence display levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::confidence_levels;

/// Size recommendation for one garment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRecommendation {
    /// Letter size, numeric waist size, or `"US <n>"` shoe size
    pub size: String,
    /// Heuristic confidence percentage in `[30, 95]`
    pub confidence: f64,
    /// Ordered advice: general statement, confidence caveat, category tip, fit preference
    pub recommendations: Vec<String>,
    /// Up to two neighbouring sizes
    #[serde(default)]
    pub alternative_sizes: Vec<String>,
    /// At most one note about the preferred fit
    #[serde(default)]
    pub fit_notes: Vec<String>,
}

impl SizeRecommendation {
    /// Display bucket for the confidence percentage
    #[must_use]
    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_percentage(self.confidence)
    }
}

/// Outcome of advisory measurement validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementValidation {
    /// True when no errors were collected
    pub is_valid: bool,
    /// One message per missing field or out-of-range value
    pub errors: Vec<String>,
}

impl MeasurementValidation {
    /// Build from collected errors
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Confidence bucket shown next to a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// 90% and above
    VeryHigh,
    /// 75% to below 90%
    High,
    /// 60% to below 75%
    Medium,
    /// Below 60%
    Low,
}

impl ConfidenceLevel {
    /// Bucket a confidence percentage
    #[must_use]
    pub fn from_percentage(confidence: f64) -> Self {
        if confidence >= confidence_levels::VERY_HIGH {
            Self::VeryHigh
        } else if confidence >= confidence_levels::HIGH {
            Self::High
        } else if confidence >= confidence_levels::MEDIUM {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_level_buckets() {
        assert_eq!(ConfidenceLevel::from_percentage(95.0), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_percentage(90.0), ConfidenceLevel::VeryHigh);
        assert_eq!(ConfidenceLevel::from_percentage(89.9), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_percentage(75.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_percentage(60.0), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_percentage(35.0), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_percentage(f64::NAN), ConfidenceLevel::Low);
    }

    #[test]
    fn test_validation_from_errors() {
        assert!(MeasurementValidation::from_errors(Vec::new()).is_valid);
        let invalid = MeasurementValidation::from_errors(vec!["Height is required".to_owned()]);
        assert!(!invalid.is_valid);
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let recommendation = SizeRecommendation {
            size: "M".to_owned(),
            confidence: 35.0,
            recommendations: Vec::new(),
            alternative_sizes: vec!["S".to_owned(), "L".to_owned()],
            fit_notes: Vec::new(),
        };
        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["alternativeSizes"][1], "L");
        assert!(json.get("fitNotes").is_some());
    }
}
