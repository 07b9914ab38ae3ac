// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for fitfindr-cli
// ABOUTME: Provides consistent display functions for recommendations, validation and brands

use fitfindr::brand::BRAND_ADJUSTMENTS;
use fitfindr::detection::AnalysisResult;
use fitfindr::history::AnalysisRecord;
use fitfindr::models::{ClothingCategory, MeasurementValidation};

/// Display an analysis result as text
pub fn display_analysis(result: &AnalysisResult) {
    println!("\n{} ({})", result.item_name, result.brand);
    println!("{}", "=".repeat(50));
    println!("   Recommended size: {}", result.size);
    println!(
        "   Confidence: {}% ({})",
        result.confidence,
        result.confidence_level()
    );

    if !result.alternative_sizes.is_empty() {
        println!("   Also try: {}", result.alternative_sizes.join(", "));
    }

    println!("\nAdvice:");
    for line in &result.recommendations {
        println!("• {line}");
    }

    if !result.fit_notes.is_empty() {
        println!("\nFit notes:");
        for note in &result.fit_notes {
            println!("• {note}");
        }
    }
}

/// Display a history record as text
pub fn display_history_record(record: &AnalysisRecord) {
    println!("\nHistory record:");
    println!("   ID: {}", record.id);
    println!("   User: {}", record.user_id);
    println!(
        "   {} - size {} ({}%)",
        record.item_name, record.recommended_size, record.confidence_score
    );
    println!("   Created: {}", record.created_at.format("%Y-%m-%d %H:%M UTC"));
}

/// Display validation messages
pub fn display_validation(validation: &MeasurementValidation) {
    if validation.is_valid {
        println!("Measurements look good");
        return;
    }

    println!("Measurements need attention:");
    for error in &validation.errors {
        println!("• {error}");
    }
}

/// Display the brand adjustment table for one category
pub fn display_brand_table(category: ClothingCategory) {
    println!("\nBrand adjustments for {}", category.display_name());
    println!("{}", "=".repeat(40));
    for entry in BRAND_ADJUSTMENTS {
        println!("   {:<20} {:+}", entry.brand, entry.for_category(category));
    }
    println!("   {:<20} {:+}", "(any other brand)", 0.0);
}
