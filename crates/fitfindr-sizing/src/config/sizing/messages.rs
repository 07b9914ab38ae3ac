// ABOUTME: Message templates for size recommendation advice and fit notes
// ABOUTME: Templates use {size} and {fit} placeholders filled in by the advice module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Placeholder replaced by the recommended size
pub const SIZE_PLACEHOLDER: &str = "{size}";
/// Placeholder replaced by the preferred fit name
pub const FIT_PLACEHOLDER: &str = "{fit}";

/// Template messages for recommendation text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceMessages {
    /// Opening statement naming the size
    pub general: String,
    /// Used when confidence reaches the high gate
    pub high_confidence: String,
    /// Used when confidence reaches the medium gate
    pub medium_confidence: String,
    /// Used below the medium gate
    pub low_confidence: String,
    /// Appended when a fit preference is set
    pub fit_preference: String,
    /// Fit note for a slim preference
    pub slim_fit_note: String,
    /// Fit note for a loose preference
    pub loose_fit_note: String,
}

impl Default for AdviceMessages {
    fn default() -> Self {
        Self {
            general: "Based on your measurements, size {size} should fit you well".to_owned(),
            high_confidence:
                "This recommendation has high confidence based on your detailed measurements"
                    .to_owned(),
            medium_confidence: "Consider trying this size in-store if possible for the best fit"
                .to_owned(),
            low_confidence: "We recommend trying multiple sizes as this is an estimate".to_owned(),
            fit_preference: "You prefer a {fit} fit - adjust accordingly".to_owned(),
            slim_fit_note: "You prefer a slim fit - consider sizing up if you want more room"
                .to_owned(),
            loose_fit_note:
                "You prefer a loose fit - consider sizing down if you want a closer fit".to_owned(),
        }
    }
}
