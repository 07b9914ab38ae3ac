// ABOUTME: Clothing category enumeration driving the sizing rules
// ABOUTME: Maps each category to its required measurements and fitting tip
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::measurements::MeasurementField;
use crate::errors::AppError;

const UPPER_BODY_REQUIRED: &[MeasurementField] = &[
    MeasurementField::Height,
    MeasurementField::Weight,
    MeasurementField::Chest,
    MeasurementField::Shoulder,
];

const PANTS_REQUIRED: &[MeasurementField] = &[
    MeasurementField::Height,
    MeasurementField::Weight,
    MeasurementField::Waist,
    MeasurementField::Hip,
    MeasurementField::Inseam,
];

const DRESS_REQUIRED: &[MeasurementField] = &[
    MeasurementField::Height,
    MeasurementField::Weight,
    MeasurementField::Chest,
    MeasurementField::Waist,
    MeasurementField::Hip,
];

const SHOE_REQUIRED: &[MeasurementField] = &[MeasurementField::ShoeSize];

/// Garment category selected by the user or reported by image analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    /// Shirts and tops, sized by chest
    Shirts,
    /// Trousers, sized by waist
    Pants,
    /// Dresses, sized by the chest/waist/hip average
    Dresses,
    /// Jackets, sized like shirts
    Jackets,
    /// Footwear, converted from EU to US sizes
    Shoes,
    /// Sports gear, sized like shirts
    Sports,
}

impl ClothingCategory {
    /// All categories in selection-screen order
    pub const ALL: [Self; 6] = [
        Self::Shirts,
        Self::Pants,
        Self::Dresses,
        Self::Jackets,
        Self::Shoes,
        Self::Sports,
    ];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Shirts => "shirts",
            Self::Pants => "pants",
            Self::Dresses => "dresses",
            Self::Jackets => "jackets",
            Self::Shoes => "shoes",
            Self::Sports => "sports",
        }
    }

    /// Capitalized name for display (`"Shirts"`)
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Shirts => "Shirts",
            Self::Pants => "Pants",
            Self::Dresses => "Dresses",
            Self::Jackets => "Jackets",
            Self::Shoes => "Shoes",
            Self::Sports => "Sports",
        }
    }

    /// Measurements that count towards completeness for this category
    #[must_use]
    pub const fn required_measurements(&self) -> &'static [MeasurementField] {
        match self {
            Self::Shirts | Self::Jackets | Self::Sports => UPPER_BODY_REQUIRED,
            Self::Pants => PANTS_REQUIRED,
            Self::Dresses => DRESS_REQUIRED,
            Self::Shoes => SHOE_REQUIRED,
        }
    }

    /// Category-specific fitting advice
    ///
    /// Jackets have no tip of their own.
    #[must_use]
    pub const fn fitting_tip(&self) -> Option<&'static str> {
        match self {
            Self::Shirts => Some("Pay attention to shoulder width and sleeve length"),
            Self::Pants => Some("Check the inseam length and waist fit"),
            Self::Dresses => Some("Consider the overall silhouette and length"),
            Self::Shoes => Some("Try on both feet as sizes can vary"),
            Self::Sports => Some("Sports gear should allow for movement without being too loose"),
            Self::Jackets => None,
        }
    }

    /// Whether neighbouring letter sizes are offered as alternatives
    ///
    /// Dresses use letter sizes too but are not included here.
    #[must_use]
    pub const fn offers_letter_alternatives(&self) -> bool {
        matches!(self, Self::Shirts | Self::Jackets | Self::Sports)
    }
}

impl FromStr for ClothingCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("unknown clothing category '{s}'")))
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
