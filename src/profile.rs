// ABOUTME: Mapping from persisted profile rows to engine measurements
// ABOUTME: Decodes snake_case profile JSON, tolerating numeric columns and unknown fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Profile rows
//!
//! A stored profile keeps measurements in snake_case columns next to
//! unrelated account data. [`ProfileRecord`] picks out the sizing fields and
//! converts them into [`UserMeasurements`].

use std::fs;
use std::path::Path;

use fitfindr_core::errors::{AppError, AppResult};
use fitfindr_core::models::{Gender, PreferredFit, UserMeasurements};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use tracing::debug;
use uuid::Uuid;

/// Measurement columns of a stored profile row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    /// Owner of the profile
    pub user_id: Option<Uuid>,
    /// Height in cm
    #[serde(deserialize_with = "text_or_number")]
    pub height: Option<String>,
    /// Weight in kg
    #[serde(deserialize_with = "text_or_number")]
    pub weight: Option<String>,
    /// Age in years
    #[serde(deserialize_with = "text_or_number")]
    pub age: Option<String>,
    /// Gender as stored; unrecognized values are dropped on conversion
    pub gender: Option<String>,
    /// Chest circumference in cm
    #[serde(deserialize_with = "text_or_number")]
    pub chest: Option<String>,
    /// Shoulder width in cm
    #[serde(deserialize_with = "text_or_number")]
    pub shoulder: Option<String>,
    /// Sleeve length in cm
    #[serde(deserialize_with = "text_or_number")]
    pub sleeve: Option<String>,
    /// Neck circumference in cm
    #[serde(deserialize_with = "text_or_number")]
    pub neck: Option<String>,
    /// Waist circumference in cm
    #[serde(deserialize_with = "text_or_number")]
    pub waist: Option<String>,
    /// Hip circumference in cm
    #[serde(deserialize_with = "text_or_number")]
    pub hip: Option<String>,
    /// Inseam length in cm
    #[serde(deserialize_with = "text_or_number")]
    pub inseam: Option<String>,
    /// Thigh circumference in cm
    #[serde(deserialize_with = "text_or_number")]
    pub thigh: Option<String>,
    /// Shoe size in EU units
    #[serde(deserialize_with = "text_or_number")]
    pub shoe_size: Option<String>,
    /// Preferred fit as stored; unrecognized values are dropped on conversion
    pub preferred_fit: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrNumber>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    }))
}

impl ProfileRecord {
    /// Decode a profile row from JSON
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the text is not a JSON object of the
    /// expected shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("profile row is not valid JSON: {e}")).with_source(e)
        })
    }

    /// Read and decode a profile row from a JSON file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or
    /// `InvalidFormat` if its contents do not decode
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read profile {}", path.display())).with_source(e)
        })?;
        Self::from_json(&contents)
    }

    /// Measurements the sizing engine understands
    #[must_use]
    pub fn to_measurements(&self) -> UserMeasurements {
        UserMeasurements::from(self.clone())
    }
}

impl From<ProfileRecord> for UserMeasurements {
    fn from(record: ProfileRecord) -> Self {
        let gender = record.gender.as_deref().and_then(|raw| {
            let parsed = raw.parse::<Gender>().ok();
            if parsed.is_none() {
                debug!(gender = raw, "Ignoring unrecognized profile gender");
            }
            parsed
        });
        let preferred_fit = record.preferred_fit.as_deref().and_then(|raw| {
            let parsed = raw.parse::<PreferredFit>().ok();
            if parsed.is_none() {
                debug!(preferred_fit = raw, "Ignoring unrecognized profile fit");
            }
            parsed
        });

        Self {
            height: record.height,
            weight: record.weight,
            age: record.age,
            gender,
            chest: record.chest,
            shoulder: record.shoulder,
            sleeve: record.sleeve,
            neck: record.neck,
            waist: record.waist,
            hip: record.hip,
            inseam: record.inseam,
            thigh: record.thigh,
            shoe_size: record.shoe_size,
            preferred_fit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitfindr_core::errors::ErrorCode;
    use fitfindr_core::models::MeasurementField;

    #[test]
    fn test_numeric_columns_become_text() {
        let record = ProfileRecord::from_json(r#"{"height": 180, "chest": 98.5}"#).unwrap();
        assert_eq!(record.height.as_deref(), Some("180"));
        assert_eq!(record.chest.as_deref(), Some("98.5"));
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let record = ProfileRecord::from_json(
            r#"{"full_name": "Sam", "created_at": "2024-01-01", "waist": "81"}"#,
        )
        .unwrap();
        assert_eq!(record.waist.as_deref(), Some("81"));
    }

    #[test]
    fn test_snake_case_columns_map_to_measurements() {
        let record = ProfileRecord::from_json(
            r#"{"shoe_size": "44", "preferred_fit": "slim", "gender": "female"}"#,
        )
        .unwrap();
        let measurements = record.to_measurements();
        assert_eq!(measurements.value(MeasurementField::ShoeSize), Some("44"));
        assert_eq!(measurements.preferred_fit, Some(PreferredFit::Slim));
        assert_eq!(measurements.gender, Some(Gender::Female));
    }

    #[test]
    fn test_unrecognized_enums_become_none() {
        let record =
            ProfileRecord::from_json(r#"{"gender": "robot", "preferred_fit": "baggy"}"#).unwrap();
        let measurements = UserMeasurements::from(record);
        assert_eq!(measurements.gender, None);
        assert_eq!(measurements.preferred_fit, None);
    }

    #[test]
    fn test_nulls_are_missing() {
        let record = ProfileRecord::from_json(r#"{"height": null, "user_id": null}"#).unwrap();
        assert_eq!(record, ProfileRecord::default());
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let error = ProfileRecord::from_json("{height: 180").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidFormat);
    }
}
