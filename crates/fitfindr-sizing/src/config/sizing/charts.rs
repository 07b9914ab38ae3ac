// ABOUTME: Size chart configuration for letter, waist, and shoe sizing
// ABOUTME: Bracket bounds per category and the EU to US shoe conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitfindr_core::constants::{chest, dress, pants, shoes, validation};
use serde::{Deserialize, Serialize};

/// Size chart bracket bounds (exclusive upper limits, ascending)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeChartConfig {
    /// Chest bounds in cm for XS..XL (shirts, jackets, sports)
    pub chest_bounds_cm: [f64; 5],
    /// Average chest/waist/hip bounds in cm for XS..XL (dresses)
    pub dress_bounds_cm: [f64; 5],
    /// Waist bounds in cm for sizes 28..38 (pants)
    pub waist_bounds_cm: [f64; 6],
    /// Offset subtracted from the EU shoe size
    pub shoe_eu_offset: f64,
    /// Factor applied after the offset to get a US size
    pub shoe_us_factor: f64,
}

impl Default for SizeChartConfig {
    fn default() -> Self {
        Self {
            chest_bounds_cm: chest::BRACKET_BOUNDS_CM,
            dress_bounds_cm: dress::BRACKET_BOUNDS_CM,
            waist_bounds_cm: pants::BRACKET_BOUNDS_CM,
            shoe_eu_offset: shoes::EU_OFFSET,
            shoe_us_factor: shoes::US_FACTOR,
        }
    }
}

/// Plausibility ranges for advisory validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationRanges {
    /// Minimum height in cm
    pub height_min_cm: f64,
    /// Maximum height in cm
    pub height_max_cm: f64,
    /// Minimum weight in kg
    pub weight_min_kg: f64,
    /// Maximum weight in kg
    pub weight_max_kg: f64,
}

impl Default for ValidationRanges {
    fn default() -> Self {
        Self {
            height_min_cm: validation::HEIGHT_MIN_CM,
            height_max_cm: validation::HEIGHT_MAX_CM,
            weight_min_kg: validation::WEIGHT_MIN_KG,
            weight_max_kg: validation::WEIGHT_MAX_KG,
        }
    }
}
