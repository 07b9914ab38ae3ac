// ABOUTME: Body measurement record as captured by the profile form
// ABOUTME: Text-typed optional fields plus gender and fit preference enumerations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::numeric::parse_measurement;

/// Gender as recorded on the user profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(AppError::invalid_input(format!("unknown gender '{s}'"))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How closely the user likes garments to fit
///
/// Only ever shapes advisory text; it never moves the computed size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PreferredFit {
    /// Close to the body
    Slim,
    /// Standard cut
    Regular,
    /// Relaxed cut
    Loose,
}

impl PreferredFit {
    /// Lowercase wire name, also used verbatim in advice text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slim => "slim",
            Self::Regular => "regular",
            Self::Loose => "loose",
        }
    }
}

impl FromStr for PreferredFit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slim" => Ok(Self::Slim),
            "regular" => Ok(Self::Regular),
            "loose" => Ok(Self::Loose),
            _ => Err(AppError::invalid_input(format!("unknown fit preference '{s}'"))),
        }
    }
}

impl fmt::Display for PreferredFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text-typed measurement fields of [`UserMeasurements`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MeasurementField {
    /// Height in cm
    Height,
    /// Weight in kg
    Weight,
    /// Age in years
    Age,
    /// Chest circumference in cm
    Chest,
    /// Shoulder width in cm
    Shoulder,
    /// Sleeve length in cm
    Sleeve,
    /// Neck circumference in cm
    Neck,
    /// Waist circumference in cm
    Waist,
    /// Hip circumference in cm
    Hip,
    /// Inseam length in cm
    Inseam,
    /// Thigh circumference in cm
    Thigh,
    /// Shoe size in EU units
    ShoeSize,
}

impl MeasurementField {
    /// Every text-typed field, in profile form order
    pub const ALL: [Self; 12] = [
        Self::Height,
        Self::Weight,
        Self::Age,
        Self::Chest,
        Self::Shoulder,
        Self::Sleeve,
        Self::Neck,
        Self::Waist,
        Self::Hip,
        Self::Inseam,
        Self::Thigh,
        Self::ShoeSize,
    ];

    /// camelCase field name as serialized
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Weight => "weight",
            Self::Age => "age",
            Self::Chest => "chest",
            Self::Shoulder => "shoulder",
            Self::Sleeve => "sleeve",
            Self::Neck => "neck",
            Self::Waist => "waist",
            Self::Hip => "hip",
            Self::Inseam => "inseam",
            Self::Thigh => "thigh",
            Self::ShoeSize => "shoeSize",
        }
    }
}

impl fmt::Display for MeasurementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body measurements supplied by the user profile
///
/// Numeric fields hold the text the user typed. Nothing is guaranteed to be
/// present, and an empty string counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserMeasurements {
    /// Height in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Weight in kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Chest circumference in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chest: Option<String>,
    /// Shoulder width in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoulder: Option<String>,
    /// Sleeve length in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleeve: Option<String>,
    /// Neck circumference in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neck: Option<String>,
    /// Waist circumference in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<String>,
    /// Hip circumference in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip: Option<String>,
    /// Inseam length in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inseam: Option<String>,
    /// Thigh circumference in cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thigh: Option<String>,
    /// Shoe size in EU units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoe_size: Option<String>,
    /// Preferred garment fit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_fit: Option<PreferredFit>,
}

impl UserMeasurements {
    /// Set a text field, returning the updated record
    #[must_use]
    pub fn with(mut self, field: MeasurementField, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// Set the gender, returning the updated record
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the fit preference, returning the updated record
    #[must_use]
    pub fn with_preferred_fit(mut self, fit: PreferredFit) -> Self {
        self.preferred_fit = Some(fit);
        self
    }

    const fn slot(&self, field: MeasurementField) -> &Option<String> {
        match field {
            MeasurementField::Height => &self.height,
            MeasurementField::Weight => &self.weight,
            MeasurementField::Age => &self.age,
            MeasurementField::Chest => &self.chest,
            MeasurementField::Shoulder => &self.shoulder,
            MeasurementField::Sleeve => &self.sleeve,
            MeasurementField::Neck => &self.neck,
            MeasurementField::Waist => &self.waist,
            MeasurementField::Hip => &self.hip,
            MeasurementField::Inseam => &self.inseam,
            MeasurementField::Thigh => &self.thigh,
            MeasurementField::ShoeSize => &self.shoe_size,
        }
    }

    fn slot_mut(&mut self, field: MeasurementField) -> &mut Option<String> {
        match field {
            MeasurementField::Height => &mut self.height,
            MeasurementField::Weight => &mut self.weight,
            MeasurementField::Age => &mut self.age,
            MeasurementField::Chest => &mut self.chest,
            MeasurementField::Shoulder => &mut self.shoulder,
            MeasurementField::Sleeve => &mut self.sleeve,
            MeasurementField::Neck => &mut self.neck,
            MeasurementField::Waist => &mut self.waist,
            MeasurementField::Hip => &mut self.hip,
            MeasurementField::Inseam => &mut self.inseam,
            MeasurementField::Thigh => &mut self.thigh,
            MeasurementField::ShoeSize => &mut self.shoe_size,
        }
    }

    /// Raw text of a field, if present and non-empty
    #[must_use]
    pub fn value(&self, field: MeasurementField) -> Option<&str> {
        self.slot(field).as_deref().filter(|text| !text.is_empty())
    }

    /// Whether a field carries a value
    #[must_use]
    pub fn is_present(&self, field: MeasurementField) -> bool {
        self.value(field).is_some()
    }

    /// Numeric value of a present field
    ///
    /// `None` when absent; `Some(NAN)` when present but not numeric.
    #[must_use]
    pub fn numeric(&self, field: MeasurementField) -> Option<f64> {
        self.value(field).map(parse_measurement)
    }

    /// Fields that carry a value, in profile form order
    pub fn present_fields(&self) -> impl Iterator<Item = MeasurementField> + '_ {
        MeasurementField::ALL
            .into_iter()
            .filter(|field| self.is_present(*field))
    }
}
