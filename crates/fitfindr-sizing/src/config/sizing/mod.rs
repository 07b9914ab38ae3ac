// ABOUTME: Sizing engine configuration with environment overrides and validation
// ABOUTME: Orchestrates confidence, size chart, validation range, and message configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sizing Configuration Module
//!
//! Type-safe configuration for the size recommendation engine. Defaults match
//! the tables in `fitfindr_core::constants`; `FITFINDR_*` environment
//! variables may override individual values.
//!
//! # Module Structure
//!
//! - `confidence` - Confidence scoring weights, clamp range and advice gates
//! - `charts` - Bracket bounds per category, shoe conversion, validation ranges
//! - `messages` - Advice and fit note templates
//! - `error` - Configuration errors

pub mod charts;
pub mod confidence;
pub mod error;
pub mod messages;

pub use charts::{SizeChartConfig, ValidationRanges};
pub use confidence::ConfidenceConfig;
pub use error::ConfigError;
pub use messages::AdviceMessages;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SIZING_CONFIG: OnceLock<SizingConfig> = OnceLock::new();

/// Main sizing configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizingConfig {
    /// Confidence scoring
    pub confidence: ConfidenceConfig,
    /// Size chart brackets and shoe conversion
    pub charts: SizeChartConfig,
    /// Validation plausibility ranges
    pub validation: ValidationRanges,
    /// Advice message templates
    pub messages: AdviceMessages,
}

impl SizingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SIZING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load sizing config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a value is not finite, a range is inverted or
    /// brackets are not ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.numeric_values().all(f64::is_finite) {
            return Err(ConfigError::ValueOutOfRange(
                "sizing values must be finite numbers",
            ));
        }

        let conf = &self.confidence;
        if conf.min >= conf.max {
            return Err(ConfigError::InvalidRange("confidence min must be < max"));
        }
        if conf.medium_gate >= conf.high_gate {
            return Err(ConfigError::InvalidRange(
                "confidence medium_gate must be < high_gate",
            ));
        }
        if conf.medium_gate < conf.min || conf.high_gate > conf.max {
            return Err(ConfigError::ValueOutOfRange(
                "confidence gates must lie within the clamp range",
            ));
        }
        if conf.completeness_weight < 0.0
            || conf.detail_bonus < 0.0
            || conf.missing_basics_penalty < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence weight, bonus and penalty must be non-negative",
            ));
        }

        let charts = &self.charts;
        if !is_ascending(&charts.chest_bounds_cm) {
            return Err(ConfigError::UnorderedBrackets("chest_bounds_cm"));
        }
        if !is_ascending(&charts.dress_bounds_cm) {
            return Err(ConfigError::UnorderedBrackets("dress_bounds_cm"));
        }
        if !is_ascending(&charts.waist_bounds_cm) {
            return Err(ConfigError::UnorderedBrackets("waist_bounds_cm"));
        }
        if charts.shoe_us_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "shoe_us_factor must be positive",
            ));
        }

        let ranges = &self.validation;
        if ranges.height_min_cm >= ranges.height_max_cm {
            return Err(ConfigError::InvalidRange(
                "height_min_cm must be < height_max_cm",
            ));
        }
        if ranges.weight_min_kg >= ranges.weight_max_kg {
            return Err(ConfigError::InvalidRange(
                "weight_min_kg must be < weight_max_kg",
            ));
        }

        Ok(())
    }

    /// Every numeric setting, for checks that apply to all of them
    fn numeric_values(&self) -> impl Iterator<Item = f64> {
        let conf = &self.confidence;
        let charts = &self.charts;
        let ranges = &self.validation;
        [
            conf.base,
            conf.completeness_weight,
            conf.detail_bonus,
            conf.missing_basics_penalty,
            conf.min,
            conf.max,
            conf.high_gate,
            conf.medium_gate,
            charts.shoe_eu_offset,
            charts.shoe_us_factor,
            ranges.height_min_cm,
            ranges.height_max_cm,
            ranges.weight_min_kg,
            ranges.weight_max_kg,
        ]
        .into_iter()
        .chain(charts.chest_bounds_cm)
        .chain(charts.dress_bounds_cm)
        .chain(charts.waist_bounds_cm)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply a comma-separated list override to a fixed-size bracket table
    fn apply_env_bounds<const N: usize>(
        env_var_name: &str,
        target: &mut [f64; N],
    ) -> Result<(), ConfigError> {
        let raw = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let values = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;

        *target = values.try_into().map_err(|values: Vec<f64>| {
            ConfigError::Parse(format!(
                "{env_var_name} expects {N} values, got {}",
                values.len()
            ))
        })?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let conf = &mut self.confidence;
        Self::apply_env_var("FITFINDR_CONFIDENCE_BASE", &mut conf.base)?;
        Self::apply_env_var(
            "FITFINDR_CONFIDENCE_COMPLETENESS_WEIGHT",
            &mut conf.completeness_weight,
        )?;
        Self::apply_env_var("FITFINDR_CONFIDENCE_DETAIL_BONUS", &mut conf.detail_bonus)?;
        Self::apply_env_var(
            "FITFINDR_CONFIDENCE_MISSING_BASICS_PENALTY",
            &mut conf.missing_basics_penalty,
        )?;
        Self::apply_env_var("FITFINDR_CONFIDENCE_MIN", &mut conf.min)?;
        Self::apply_env_var("FITFINDR_CONFIDENCE_MAX", &mut conf.max)?;
        Self::apply_env_var("FITFINDR_CONFIDENCE_HIGH_GATE", &mut conf.high_gate)?;
        Self::apply_env_var("FITFINDR_CONFIDENCE_MEDIUM_GATE", &mut conf.medium_gate)?;

        let charts = &mut self.charts;
        Self::apply_env_bounds("FITFINDR_CHEST_BOUNDS_CM", &mut charts.chest_bounds_cm)?;
        Self::apply_env_bounds("FITFINDR_DRESS_BOUNDS_CM", &mut charts.dress_bounds_cm)?;
        Self::apply_env_bounds("FITFINDR_WAIST_BOUNDS_CM", &mut charts.waist_bounds_cm)?;
        Self::apply_env_var("FITFINDR_SHOE_EU_OFFSET", &mut charts.shoe_eu_offset)?;
        Self::apply_env_var("FITFINDR_SHOE_US_FACTOR", &mut charts.shoe_us_factor)?;

        let ranges = &mut self.validation;
        Self::apply_env_var("FITFINDR_HEIGHT_MIN_CM", &mut ranges.height_min_cm)?;
        Self::apply_env_var("FITFINDR_HEIGHT_MAX_CM", &mut ranges.height_max_cm)?;
        Self::apply_env_var("FITFINDR_WEIGHT_MIN_KG", &mut ranges.weight_min_kg)?;
        Self::apply_env_var("FITFINDR_WEIGHT_MAX_KG", &mut ranges.weight_max_kg)?;

        Ok(self)
    }
}

fn is_ascending(bounds: &[f64]) -> bool {
    bounds.windows(2).all(|pair| pair[0] < pair[1])
}
