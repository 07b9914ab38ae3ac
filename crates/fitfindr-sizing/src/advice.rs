// ABOUTME: Advisory text, alternative sizes, and fit notes for a recommendation
// ABOUTME: Orders advice from general statement to fit preference and picks neighbouring sizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitfindr_core::constants::{letter_sizes, pants};
use fitfindr_core::models::{ClothingCategory, PreferredFit, UserMeasurements};
use fitfindr_core::numeric::parse_leading_integer;

use crate::config::{AdviceMessages, ConfidenceConfig, FIT_PLACEHOLDER, SIZE_PLACEHOLDER};

/// Build the ordered advice list
///
/// Order: general statement, confidence caveat, category tip (if any),
/// fit preference (if any).
#[must_use]
pub fn generate_recommendations(
    measurements: &UserMeasurements,
    category: ClothingCategory,
    size: &str,
    confidence: f64,
    gates: &ConfidenceConfig,
    messages: &AdviceMessages,
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(4);

    recommendations.push(messages.general.replace(SIZE_PLACEHOLDER, size));

    let caveat = if confidence >= gates.high_gate {
        &messages.high_confidence
    } else if confidence >= gates.medium_gate {
        &messages.medium_confidence
    } else {
        &messages.low_confidence
    };
    recommendations.push(caveat.clone());

    if let Some(tip) = category.fitting_tip() {
        recommendations.push(tip.to_owned());
    }

    if let Some(fit) = measurements.preferred_fit {
        recommendations.push(messages.fit_preference.replace(FIT_PLACEHOLDER, fit.as_str()));
    }

    recommendations
}

/// Neighbouring sizes worth trying
///
/// Letter-sized shirts, jackets and sports gear offer the adjacent ladder
/// entries; pants offer ±2 within 28–40. Dresses and shoes get none.
#[must_use]
pub fn alternative_sizes(size: &str, category: ClothingCategory) -> Vec<String> {
    if category.offers_letter_alternatives() {
        letter_neighbours(size)
    } else if category == ClothingCategory::Pants {
        waist_neighbours(size)
    } else {
        Vec::new()
    }
}

fn letter_neighbours(size: &str) -> Vec<String> {
    let ladder = &letter_sizes::LADDER;
    let Some(index) = ladder.iter().position(|label| *label == size) else {
        return Vec::new();
    };

    let mut alternatives = Vec::with_capacity(2);
    if let Some(smaller) = index.checked_sub(1).and_then(|i| ladder.get(i)) {
        alternatives.push((*smaller).to_owned());
    }
    if let Some(larger) = ladder.get(index + 1) {
        alternatives.push((*larger).to_owned());
    }
    alternatives
}

fn waist_neighbours(size: &str) -> Vec<String> {
    let Some(current) = parse_leading_integer(size) else {
        return Vec::new();
    };

    let mut alternatives = Vec::with_capacity(2);
    if current > pants::MIN_SIZE {
        alternatives.push((current - pants::SIZE_STEP).to_string());
    }
    if current < pants::MAX_SIZE {
        alternatives.push((current + pants::SIZE_STEP).to_string());
    }
    alternatives
}

/// Notes derived from the fit preference; regular or unset adds nothing
#[must_use]
pub fn fit_notes(measurements: &UserMeasurements, messages: &AdviceMessages) -> Vec<String> {
    match measurements.preferred_fit {
        Some(PreferredFit::Slim) => vec![messages.slim_fit_note.clone()],
        Some(PreferredFit::Loose) => vec![messages.loose_fit_note.clone()],
        Some(PreferredFit::Regular) | None => Vec::new(),
    }
}
