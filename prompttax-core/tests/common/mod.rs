//! Shared fixtures for engine integration tests
//!
//! Provides:
//! - The reference usage profile used across scenarios
//! - Pinned dates for reproducible trend series
//! - Tolerance helpers for floating-point comparisons
//! - proptest strategies for usage profiles

#![allow(dead_code)]

use chrono::NaiveDate;
use proptest::prelude::*;

use prompttax_core::{Category, UsageEntry};

/// Relative tolerance for comparisons across reordered float sums
pub const REL_TOLERANCE: f64 = 1e-9;

/// Upper bound for generated daily minutes (10 hours)
pub const MAX_GENERATED_MINUTES: f64 = 600.0;

/// Date trend series are pinned to
pub fn pinned_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

/// Chatbots 45, search 20, image 10, video 5, writing 15 minutes/day
pub fn reference_profile() -> Vec<UsageEntry> {
    vec![
        UsageEntry::new(Category::Chatbots, 45.0),
        UsageEntry::new(Category::AiSearch, 20.0),
        UsageEntry::new(Category::AiImageGen, 10.0),
        UsageEntry::new(Category::AiVideoGen, 5.0),
        UsageEntry::new(Category::AiWriting, 15.0),
    ]
}

/// `a` and `b` agree to within `REL_TOLERANCE` of the larger magnitude
pub fn approx_eq(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1e-12);
    (a - b).abs() <= REL_TOLERANCE * scale
}

#[track_caller]
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        approx_eq(actual, expected),
        "expected {expected}, got {actual}"
    );
}

/// Any category
pub fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

/// Profile with one entry per category, random minutes
pub fn full_profile() -> impl Strategy<Value = Vec<UsageEntry>> {
    prop::collection::vec(0.0..MAX_GENERATED_MINUTES, 5).prop_map(|minutes| {
        Category::ALL
            .iter()
            .zip(minutes)
            .map(|(&category, m)| UsageEntry::new(category, m))
            .collect()
    })
}

/// Profile with any subset of categories in any order
pub fn partial_profile() -> impl Strategy<Value = Vec<UsageEntry>> {
    prop::collection::vec((category(), 0.0..MAX_GENERATED_MINUTES), 0..5).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(category, m)| UsageEntry::new(category, m))
            .collect()
    })
}

/// Any built-in region code
pub fn region_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "US", "US-CA", "US-TX", "GB", "DE", "FR", "IN", "CN", "JP", "BR", "AU", "SE", "NO",
    ])
}
