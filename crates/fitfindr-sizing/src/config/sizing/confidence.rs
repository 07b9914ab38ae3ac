// ABOUTME: Confidence scoring configuration for size recommendations
// ABOUTME: Base score, completeness weight, bonus and penalty, clamp range, and advice gates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitfindr_core::constants::confidence;
use serde::{Deserialize, Serialize};

/// Confidence scoring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Starting score before adjustments
    pub base: f64,
    /// Points for a complete set of required measurements (scaled by completeness)
    pub completeness_weight: f64,
    /// Flat bonus when chest, waist and hip are all present
    pub detail_bonus: f64,
    /// Deduction when height or weight is missing
    pub missing_basics_penalty: f64,
    /// Lower clamp
    pub min: f64,
    /// Upper clamp
    pub max: f64,
    /// Score at which the high-confidence statement is used
    pub high_gate: f64,
    /// Score at which an in-store fitting is suggested
    pub medium_gate: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            base: confidence::BASE,
            completeness_weight: confidence::COMPLETENESS_WEIGHT,
            detail_bonus: confidence::DETAIL_BONUS,
            missing_basics_penalty: confidence::MISSING_BASICS_PENALTY,
            min: confidence::MIN,
            max: confidence::MAX,
            high_gate: confidence::HIGH_GATE,
            medium_gate: confidence::MEDIUM_GATE,
        }
    }
}
