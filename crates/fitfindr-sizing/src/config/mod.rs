// ABOUTME: Configuration module for fitfindr-sizing crate
// ABOUTME: Re-exports sizing configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Sizing engine configuration (confidence, size charts, validation, messages)
pub mod sizing;

pub use sizing::messages::{FIT_PLACEHOLDER, SIZE_PLACEHOLDER};
pub use sizing::{
    AdviceMessages, ConfidenceConfig, ConfigError, SizeChartConfig, SizingConfig,
    ValidationRanges,
};
