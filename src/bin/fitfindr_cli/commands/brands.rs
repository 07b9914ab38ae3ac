// ABOUTME: Brand table command for fitfindr-cli
// ABOUTME: Lists the known brands and their size adjustment for one category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fitfindr::models::ClothingCategory;

use crate::helpers::display::display_brand_table;

/// Print brand adjustments for `category`
pub fn run(category: ClothingCategory) {
    display_brand_table(category);
}
