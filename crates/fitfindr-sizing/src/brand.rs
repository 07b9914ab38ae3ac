// ABOUTME: Per-brand size adjustment table
// ABOUTME: Extension point for brand-specific sizing; every known entry is currently zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitfindr_core::models::ClothingCategory;

/// Adjustments for one brand, one entry per category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandAdjustments {
    /// Brand name, matched exactly
    pub brand: &'static str,
    /// Shirts adjustment
    pub shirts: f64,
    /// Pants adjustment
    pub pants: f64,
    /// Dresses adjustment
    pub dresses: f64,
    /// Jackets adjustment
    pub jackets: f64,
    /// Shoes adjustment
    pub shoes: f64,
    /// Sports adjustment
    pub sports: f64,
}

impl BrandAdjustments {
    const fn neutral(brand: &'static str) -> Self {
        Self {
            brand,
            shirts: 0.0,
            pants: 0.0,
            dresses: 0.0,
            jackets: 0.0,
            shoes: 0.0,
            sports: 0.0,
        }
    }

    /// Adjustment for one category
    #[must_use]
    pub const fn for_category(&self, category: ClothingCategory) -> f64 {
        match category {
            ClothingCategory::Shirts => self.shirts,
            ClothingCategory::Pants => self.pants,
            ClothingCategory::Dresses => self.dresses,
            ClothingCategory::Jackets => self.jackets,
            ClothingCategory::Shoes => self.shoes,
            ClothingCategory::Sports => self.sports,
        }
    }
}

/// Known brand adjustments
pub const BRAND_ADJUSTMENTS: &[BrandAdjustments] = &[
    BrandAdjustments::neutral("Nike"),
    BrandAdjustments::neutral("Adidas"),
];

/// Size adjustment for a brand and category; unknown brands get `0.0`
///
/// Not applied by the size calculators yet.
#[must_use]
pub fn get_brand_size_adjustment(brand: &str, category: ClothingCategory) -> f64 {
    BRAND_ADJUSTMENTS
        .iter()
        .find(|entry| entry.brand == brand)
        .map_or(0.0, |entry| entry.for_category(category))
}
