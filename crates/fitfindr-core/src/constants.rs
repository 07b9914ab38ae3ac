// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Size ladders, bracket bounds, confidence weights, and validation ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data tables for the sizing heuristics. Bracket bounds are exclusive
//! upper limits: a value equal to a bound falls into the next bracket.

/// Letter size ladder shared by shirts, jackets, sports gear and dresses
pub mod letter_sizes {
    /// Ordered letter sizes, smallest first
    pub const LADDER: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];
    /// Size used when a letter-sized category lacks its measurements
    pub const DEFAULT: &str = "M";
}

/// Chest-based brackets (shirts, jackets, sports)
pub mod chest {
    /// Exclusive upper bounds in cm for XS, S, M, L, XL (anything above is XXL)
    pub const BRACKET_BOUNDS_CM: [f64; 5] = [90.0, 100.0, 110.0, 120.0, 130.0];
}

/// Average of chest, waist and hip (dresses)
pub mod dress {
    /// Exclusive upper bounds in cm for XS, S, M, L, XL (anything above is XXL)
    pub const BRACKET_BOUNDS_CM: [f64; 5] = [85.0, 95.0, 105.0, 115.0, 125.0];
}

/// Waist-based numeric sizes (pants)
pub mod pants {
    /// Ordered waist sizes in inches, smallest first
    pub const LADDER: [&str; 7] = ["28", "30", "32", "34", "36", "38", "40"];
    /// Exclusive upper bounds in cm for each ladder entry except the last
    pub const BRACKET_BOUNDS_CM: [f64; 6] = [70.0, 75.0, 80.0, 85.0, 90.0, 95.0];
    /// Size used when the waist measurement is missing
    pub const DEFAULT: &str = "32";
    /// Smallest size that still has a lower alternative above it
    pub const MIN_SIZE: i64 = 28;
    /// Largest size that still has an upper alternative below it
    pub const MAX_SIZE: i64 = 40;
    /// Step between neighbouring waist sizes
    pub const SIZE_STEP: i64 = 2;
}

/// EU to US shoe size conversion
pub mod shoes {
    /// Size returned when no shoe size is known (kept in EU units)
    pub const DEFAULT: &str = "42";
    /// EU size subtracted before scaling
    pub const EU_OFFSET: f64 = 33.0;
    /// Scale applied to the offset EU size
    pub const US_FACTOR: f64 = 0.8;
    /// Prefix for converted sizes
    pub const US_PREFIX: &str = "US";
}

/// Heuristic confidence scoring
pub mod confidence {
    /// Starting confidence before any adjustment
    pub const BASE: f64 = 50.0;
    /// Points awarded for a complete set of required measurements
    pub const COMPLETENESS_WEIGHT: f64 = 30.0;
    /// Bonus when chest, waist and hip are all known
    pub const DETAIL_BONUS: f64 = 10.0;
    /// Penalty when height or weight is missing
    pub const MISSING_BASICS_PENALTY: f64 = 15.0;
    /// Lower clamp
    pub const MIN: f64 = 30.0;
    /// Upper clamp
    pub const MAX: f64 = 95.0;
    /// At or above this value the recommendation is stated with high confidence
    pub const HIGH_GATE: f64 = 85.0;
    /// At or above this value an in-store fitting is suggested
    pub const MEDIUM_GATE: f64 = 70.0;
}

/// Display labels for confidence percentages
pub mod confidence_levels {
    /// Lower bound of "Very High"
    pub const VERY_HIGH: f64 = 90.0;
    /// Lower bound of "High"
    pub const HIGH: f64 = 75.0;
    /// Lower bound of "Medium"
    pub const MEDIUM: f64 = 60.0;
}

/// Plausibility ranges used by measurement validation
pub mod validation {
    /// Minimum plausible height in cm
    pub const HEIGHT_MIN_CM: f64 = 100.0;
    /// Maximum plausible height in cm
    pub const HEIGHT_MAX_CM: f64 = 250.0;
    /// Minimum plausible weight in kg
    pub const WEIGHT_MIN_KG: f64 = 30.0;
    /// Maximum plausible weight in kg
    pub const WEIGHT_MAX_KG: f64 = 200.0;
}

/// Brands with an entry in the size adjustment table
pub mod brands {
    /// Known brand names
    pub const KNOWN: [&str; 2] = ["Nike", "Adidas"];
    /// Brand recorded when the detector does not report one
    pub const GENERIC: &str = "Generic Brand";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const FITFINDR: &str = "fitfindr";
}

/// Fallback labels for persisted analysis history
pub mod history {
    /// Item name stored when none is available
    pub const UNKNOWN_ITEM: &str = "Unknown Item";
    /// Suffix appended to a category display name to form an item name
    pub const ITEM_SUFFIX: &str = "Item";
}
