// ABOUTME: Integration tests for size recommendations through the public API
// ABOUTME: Covers default sizes, bracket boundaries, confidence clamping, alternatives, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{full_profile, measurements};
use fitfindr::models::{ClothingCategory, MeasurementField, PreferredFit, UserMeasurements};
use fitfindr::{calculate_size, SizeRecommendationEngine, SizeRecommender, SizingConfig};

fn assert_confidence(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected confidence {expected}, got {actual}"
    );
}

// === Defaults for empty input ===

#[test]
fn test_empty_measurements_give_category_defaults() {
    let empty = UserMeasurements::default();
    let expected = [
        (ClothingCategory::Shirts, "M"),
        (ClothingCategory::Pants, "32"),
        (ClothingCategory::Dresses, "M"),
        (ClothingCategory::Jackets, "M"),
        (ClothingCategory::Shoes, "42"),
        (ClothingCategory::Sports, "M"),
    ];

    for (category, size) in expected {
        let recommendation = calculate_size(&empty, category, None);
        assert_eq!(recommendation.size, size, "default size for {category}");
        assert_confidence(recommendation.confidence, 35.0);
    }
}

#[test]
fn test_empty_string_counts_as_missing() {
    let blank = measurements(&[
        (MeasurementField::Chest, ""),
        (MeasurementField::Height, ""),
    ]);
    let recommendation = calculate_size(&blank, ClothingCategory::Shirts, None);
    assert_eq!(recommendation.size, "M");
    assert_confidence(recommendation.confidence, 35.0);
}

// === Confidence ===

#[test]
fn test_confidence_stays_within_clamp_for_every_field_subset() {
    let fields = MeasurementField::ALL;
    for mask in 0_u32..(1 << fields.len()) {
        let subset: Vec<_> = fields
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, field)| (*field, "100"))
            .collect();
        let input = measurements(&subset);

        for category in ClothingCategory::ALL {
            let confidence = calculate_size(&input, category, None).confidence;
            assert!(
                (30.0..=95.0).contains(&confidence),
                "confidence {confidence} out of range for {category} with mask {mask:#x}"
            );
        }
    }
}

#[test]
fn test_full_profile_confidence_per_category() {
    let profile = full_profile();
    let expected = [
        (ClothingCategory::Shirts, 90.0),
        (ClothingCategory::Pants, 90.0),
        (ClothingCategory::Dresses, 90.0),
        (ClothingCategory::Jackets, 90.0),
        (ClothingCategory::Shoes, 90.0),
        (ClothingCategory::Sports, 90.0),
    ];
    for (category, confidence) in expected {
        assert_confidence(
            calculate_size(&profile, category, None).confidence,
            confidence,
        );
    }
}

#[test]
fn test_detail_bonus_double_counts_required_fields() {
    let input = measurements(&[
        (MeasurementField::Height, "165"),
        (MeasurementField::Weight, "60"),
        (MeasurementField::Chest, "88"),
        (MeasurementField::Waist, "70"),
        (MeasurementField::Hip, "95"),
    ]);
    // full completeness plus the chest/waist/hip bonus
    assert_confidence(
        calculate_size(&input, ClothingCategory::Dresses, None).confidence,
        90.0,
    );
}

#[test]
fn test_partial_completeness_is_not_rounded() {
    let input = measurements(&[
        (MeasurementField::Height, "180"),
        (MeasurementField::Weight, "80"),
        (MeasurementField::Chest, "100"),
    ]);
    assert_confidence(
        calculate_size(&input, ClothingCategory::Jackets, None).confidence,
        72.5,
    );
}

// === Size brackets ===

#[test]
fn test_shirt_brackets() {
    let cases = [
        ("85", "XS"),
        ("95", "S"),
        ("105", "M"),
        ("115", "L"),
        ("125", "XL"),
        ("135", "XXL"),
    ];
    for (chest, size) in cases {
        let input = measurements(&[(MeasurementField::Chest, chest)]);
        assert_eq!(
            calculate_size(&input, ClothingCategory::Shirts, None).size,
            size,
            "chest {chest}"
        );
    }
}

#[test]
fn test_shirt_boundaries_resolve_upward() {
    let cases = [
        ("90", "S"),
        ("100", "M"),
        ("110", "L"),
        ("120", "XL"),
        ("130", "XXL"),
    ];
    for (chest, size) in cases {
        let input = measurements(&[(MeasurementField::Chest, chest)]);
        assert_eq!(
            calculate_size(&input, ClothingCategory::Shirts, None).size,
            size
        );
    }
}

#[test]
fn test_jackets_and_sports_follow_shirts() {
    let input = measurements(&[(MeasurementField::Chest, "112")]);
    for category in [ClothingCategory::Jackets, ClothingCategory::Sports] {
        assert_eq!(calculate_size(&input, category, None).size, "L");
    }
}

#[test]
fn test_pants_waist() {
    let at_78 = measurements(&[(MeasurementField::Waist, "78")]);
    assert_eq!(
        calculate_size(&at_78, ClothingCategory::Pants, None).size,
        "32"
    );

    let at_80 = measurements(&[(MeasurementField::Waist, "80")]);
    assert_eq!(
        calculate_size(&at_80, ClothingCategory::Pants, None).size,
        "34"
    );

    let at_120 = measurements(&[(MeasurementField::Waist, "120")]);
    assert_eq!(
        calculate_size(&at_120, ClothingCategory::Pants, None).size,
        "40"
    );
}

#[test]
fn test_dress_needs_all_three_measurements() {
    let partial = measurements(&[
        (MeasurementField::Chest, "80"),
        (MeasurementField::Waist, "70"),
    ]);
    assert_eq!(
        calculate_size(&partial, ClothingCategory::Dresses, None).size,
        "M"
    );

    let complete = measurements(&[
        (MeasurementField::Chest, "80"),
        (MeasurementField::Waist, "70"),
        (MeasurementField::Hip, "90"),
    ]);
    // average 80
    assert_eq!(
        calculate_size(&complete, ClothingCategory::Dresses, None).size,
        "XS"
    );
}

#[test]
fn test_shoe_conversion() {
    let input = measurements(&[(MeasurementField::ShoeSize, "43")]);
    assert_eq!(
        calculate_size(&input, ClothingCategory::Shoes, None).size,
        "US 8"
    );

    // (39.5 - 33) * 0.8 = 5.2
    let half = measurements(&[(MeasurementField::ShoeSize, "39.5")]);
    assert_eq!(
        calculate_size(&half, ClothingCategory::Shoes, None).size,
        "US 5"
    );
}

#[test]
fn test_malformed_numbers_fall_through_to_largest_bracket() {
    let input = measurements(&[
        (MeasurementField::Chest, "big"),
        (MeasurementField::Waist, "n/a"),
        (MeasurementField::ShoeSize, "?"),
    ]);
    assert_eq!(
        calculate_size(&input, ClothingCategory::Shirts, None).size,
        "XXL"
    );
    assert_eq!(
        calculate_size(&input, ClothingCategory::Pants, None).size,
        "40"
    );
    assert_eq!(
        calculate_size(&input, ClothingCategory::Shoes, None).size,
        "US NaN"
    );
}

#[test]
fn test_numeric_prefix_is_used() {
    let input = measurements(&[(MeasurementField::Chest, "96cm")]);
    assert_eq!(
        calculate_size(&input, ClothingCategory::Shirts, None).size,
        "S"
    );
}

#[test]
fn test_brand_does_not_change_size() {
    let profile = full_profile();
    for category in ClothingCategory::ALL {
        let generic = calculate_size(&profile, category, None);
        for brand in ["Nike", "Adidas", "Uniqlo"] {
            assert_eq!(calculate_size(&profile, category, Some(brand)), generic);
        }
    }
}

// === Alternatives, advice and notes ===

#[test]
fn test_alternative_sizes() {
    let medium = measurements(&[(MeasurementField::Chest, "105")]);
    assert_eq!(
        calculate_size(&medium, ClothingCategory::Shirts, None).alternative_sizes,
        vec!["S", "L"]
    );

    let extra_small = measurements(&[(MeasurementField::Chest, "80")]);
    assert_eq!(
        calculate_size(&extra_small, ClothingCategory::Sports, None).alternative_sizes,
        vec!["S"]
    );

    let waist = measurements(&[(MeasurementField::Waist, "78")]);
    assert_eq!(
        calculate_size(&waist, ClothingCategory::Pants, None).alternative_sizes,
        vec!["30", "34"]
    );
}

#[test]
fn test_dresses_and_shoes_have_no_alternatives() {
    let profile = full_profile();
    assert!(calculate_size(&profile, ClothingCategory::Dresses, None)
        .alternative_sizes
        .is_empty());
    assert!(calculate_size(&profile, ClothingCategory::Shoes, None)
        .alternative_sizes
        .is_empty());
}

#[test]
fn test_advice_for_high_confidence_shoes() {
    let recommendation = calculate_size(&full_profile(), ClothingCategory::Shoes, None);
    assert_eq!(
        recommendation.recommendations,
        vec![
            "Based on your measurements, size US 8 should fit you well",
            "This recommendation has high confidence based on your detailed measurements",
            "Try on both feet as sizes can vary",
            "You prefer a regular fit - adjust accordingly",
        ]
    );
    assert!(recommendation.fit_notes.is_empty());
}

#[test]
fn test_low_confidence_advice() {
    let recommendation =
        calculate_size(&UserMeasurements::default(), ClothingCategory::Pants, None);
    assert_eq!(
        recommendation.recommendations[1],
        "We recommend trying multiple sizes as this is an estimate"
    );
}

#[test]
fn test_loose_fit_note() {
    let input = UserMeasurements::default().with_preferred_fit(PreferredFit::Loose);
    let recommendation = calculate_size(&input, ClothingCategory::Sports, None);
    assert_eq!(
        recommendation.fit_notes,
        vec!["You prefer a loose fit - consider sizing down if you want a closer fit"]
    );
}

// === Determinism ===

#[test]
fn test_identical_inputs_give_identical_output() {
    let profile = full_profile();
    for category in ClothingCategory::ALL {
        let first = calculate_size(&profile, category, Some("Nike"));
        let second = calculate_size(&profile, category, Some("Nike"));
        assert_eq!(first, second);

        let first = serde_json::to_string(&first).unwrap();
        let second = serde_json::to_string(&second).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_default_recommender_matches_free_function() {
    let recommender = SizeRecommender::with_config(SizingConfig::default());
    let profile = full_profile();
    for category in ClothingCategory::ALL {
        assert_eq!(
            recommender.recommend(&profile, category, None),
            calculate_size(&profile, category, None)
        );
    }
}

#[test]
fn test_recommendation_json_uses_camel_case() {
    let value = serde_json::to_value(calculate_size(
        &full_profile(),
        ClothingCategory::Shirts,
        None,
    ))
    .unwrap();
    assert!(value.get("alternativeSizes").is_some());
    assert!(value.get("fitNotes").is_some());
    assert_eq!(value["size"], "M");
}
