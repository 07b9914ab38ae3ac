// ABOUTME: Criterion benchmarks for the size recommendation engine
// ABOUTME: Measures single recommendations, batch sizing, validation, and profile decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the size recommendation engine.
//!
//! Measures per-category recommendation cost, batch throughput over many
//! profiles, validation, and decoding of stored profile rows.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitfindr::models::{ClothingCategory, Gender, MeasurementField, PreferredFit, UserMeasurements};
use fitfindr::profile::ProfileRecord;
use fitfindr::{calculate_size, validate_measurements, SizeRecommendationEngine, SizeRecommender};

const PROFILE_ROW: &str = r#"{"user_id": null, "height": 181, "weight": "79", "gender": "male",
    "chest": "102", "shoulder": "47", "waist": "84", "hip": "99", "inseam": "82",
    "shoe_size": "44", "preferred_fit": "regular", "full_name": "Bench User"}"#;

fn complete_profile() -> UserMeasurements {
    UserMeasurements::default()
        .with(MeasurementField::Height, "181")
        .with(MeasurementField::Weight, "79")
        .with(MeasurementField::Chest, "102")
        .with(MeasurementField::Shoulder, "47")
        .with(MeasurementField::Waist, "84")
        .with(MeasurementField::Hip, "99")
        .with(MeasurementField::Inseam, "82")
        .with(MeasurementField::ShoeSize, "44")
        .with_gender(Gender::Male)
        .with_preferred_fit(PreferredFit::Slim)
}

/// Generate `count` profiles spread across every size bracket
fn generate_profiles(count: usize) -> Vec<UserMeasurements> {
    (0..count)
        .map(|index| {
            let chest = 82 + (index * 7) % 56;
            let waist = 64 + (index * 5) % 38;
            let shoe = 36 + index % 12;
            UserMeasurements::default()
                .with(MeasurementField::Height, (150 + index % 50).to_string())
                .with(MeasurementField::Weight, (50 + index % 60).to_string())
                .with(MeasurementField::Chest, chest.to_string())
                .with(MeasurementField::Waist, waist.to_string())
                .with(MeasurementField::Hip, (chest + 4).to_string())
                .with(MeasurementField::ShoeSize, shoe.to_string())
        })
        .collect()
}

fn bench_single_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_size");
    let profile = complete_profile();

    for category in ClothingCategory::ALL {
        group.bench_with_input(
            BenchmarkId::new("category", category.as_str()),
            &category,
            |b, category| {
                b.iter(|| calculate_size(black_box(&profile), *category, black_box(Some("Nike"))));
            },
        );
    }

    group.bench_function("empty_measurements", |b| {
        let empty = UserMeasurements::default();
        b.iter(|| calculate_size(black_box(&empty), ClothingCategory::Dresses, None));
    });

    group.finish();
}

fn bench_batch_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_sizing");
    let recommender = SizeRecommender::default();

    for count in [10, 100, 1000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("all_categories", count),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    for profile in profiles {
                        for category in ClothingCategory::ALL {
                            black_box(recommender.recommend(profile, category, None));
                        }
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    let complete = complete_profile();
    let empty = UserMeasurements::default();

    group.bench_function("complete_profile", |b| {
        b.iter(|| validate_measurements(black_box(&complete)));
    });
    group.bench_function("empty_profile", |b| {
        b.iter(|| validate_measurements(black_box(&empty)));
    });

    group.finish();
}

fn bench_profile_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile");

    group.bench_function("decode_row", |b| {
        b.iter(|| ProfileRecord::from_json(black_box(PROFILE_ROW)));
    });
    group.bench_function("decode_and_recommend", |b| {
        b.iter(|| {
            ProfileRecord::from_json(black_box(PROFILE_ROW)).map(|record| {
                calculate_size(&record.to_measurements(), ClothingCategory::Shirts, None)
            })
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_recommendation,
    bench_batch_recommendations,
    bench_validation,
    bench_profile_decoding
);
criterion_main!(benches);
