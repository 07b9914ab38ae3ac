// ABOUTME: Core data models for size recommendations
// ABOUTME: Re-exports measurement, category, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Clothing categories and their sizing requirements
pub mod category;
/// User body measurements
pub mod measurements;
/// Recommendation and validation output records
pub mod recommendation;

pub use category::ClothingCategory;
pub use measurements::{Gender, MeasurementField, PreferredFit, UserMeasurements};
pub use recommendation::{ConfidenceLevel, MeasurementValidation, SizeRecommendation};
