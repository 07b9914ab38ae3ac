// ABOUTME: Analysis history record built from a completed size analysis
// ABOUTME: Shape of the row a client stores after showing a recommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use fitfindr_core::constants::history;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::detection::AnalysisResult;

/// One entry in a user's analysis history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owner of the record
    pub user_id: Uuid,
    /// Garment display name
    pub item_name: String,
    /// Size that was recommended
    pub recommended_size: String,
    /// Confidence percentage shown to the user
    pub confidence_score: f64,
    /// Category name, lowercase
    pub category: String,
    /// Brand, if any
    pub brand: Option<String>,
    /// When the analysis was made
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Record an analysis made now
    #[must_use]
    pub fn from_result(user_id: Uuid, result: &AnalysisResult) -> Self {
        Self::from_result_at(user_id, result, Utc::now())
    }

    /// Record an analysis with an explicit timestamp
    #[must_use]
    pub fn from_result_at(
        user_id: Uuid,
        result: &AnalysisResult,
        created_at: DateTime<Utc>,
    ) -> Self {
        let item_name = if result.item_name.trim().is_empty() {
            history::UNKNOWN_ITEM.to_owned()
        } else {
            result.item_name.clone()
        };

        Self {
            id: Uuid::new_v4(),
            user_id,
            item_name,
            recommended_size: result.size.clone(),
            confidence_score: result.confidence,
            category: result.category.as_str().to_owned(),
            brand: Some(result.brand.clone()).filter(|brand| !brand.is_empty()),
            created_at,
        }
    }
}
