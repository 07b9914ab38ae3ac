// ABOUTME: Configuration error types for sizing configuration validation
// ABOUTME: Defines error variants for invalid ranges, unordered brackets, and bad overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for sizing configuration validation.

use fitfindr_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lower and upper values are in the wrong order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Bracket bounds are not strictly ascending
    #[error("Unordered brackets: {0}")]
    UnorderedBrackets(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        match error {
            ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ValueOutOfRange, message).with_source(error)
            }
            _ => Self::config_invalid(message).with_source(error),
        }
    }
}
