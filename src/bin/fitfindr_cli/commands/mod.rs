// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for fitfindr-cli
// ABOUTME: Provides access to recommendation, validation and brand table commands

pub mod brands;
pub mod recommend;
pub mod validate;

use fitfindr::errors::AppResult;
use fitfindr::{SizeRecommender, SizingConfig};

/// Engine built from the `FITFINDR_*` environment
///
/// A rejected override ends the command instead of falling back to defaults.
pub fn configured_engine() -> AppResult<SizeRecommender> {
    Ok(SizeRecommender::with_config(SizingConfig::load()?))
}
