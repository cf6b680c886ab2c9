//! Reference Table Validation
//!
//! Checks a [`ReferenceDocument`] before it is served to the calculator.
//!
//! ## Rules
//!
//! | Table    | Rule                                              |
//! |----------|---------------------------------------------------|
//! | category | unique category, watts/minute > 0                 |
//! | region   | unique code, PUE ≥ 1, grid/water/pollutants ≥ 0   |
//! | credit   | unique id, price/ton > 0, available tons ≥ 0      |
//!
//! Non-finite values fail every range check. [`issues`] collects every
//! violation for tooling; [`validate`] stops at the first.

use std::collections::HashSet;

use crate::document::ReferenceDocument;
use crate::ReferenceError;

/// Every rule violation in `document`, in table order
pub fn issues(document: &ReferenceDocument) -> Vec<ReferenceError> {
    let mut found = Vec::new();

    let mut seen_categories = HashSet::new();
    for row in &document.categories {
        if !seen_categories.insert(row.category) {
            found.push(ReferenceError::DuplicateCategory(row.category));
        }
        check(
            &mut found,
            "category",
            row.category.id(),
            "avg_watts_per_minute",
            row.avg_watts_per_minute,
            |v| v > 0.0,
        );
    }

    let mut seen_regions = HashSet::new();
    for row in &document.regions {
        let key = row.region_code.as_str();
        if !seen_regions.insert(key) {
            found.push(ReferenceError::DuplicateRegion(key.to_string()));
        }

        check(&mut found, "region", key, "pue_multiplier", row.pue_multiplier, |v| v >= 1.0);

        let factors = [
            ("grid_intensity_g_co2_per_kwh", row.grid_intensity_g_co2_per_kwh),
            ("water_liters_per_kwh", row.water_liters_per_kwh),
            ("pm25_factor_mg_per_kwh", row.pm25_factor_mg_per_kwh),
            ("so2_factor_mg_per_kwh", row.so2_factor_mg_per_kwh),
            ("nox_factor_mg_per_kwh", row.nox_factor_mg_per_kwh),
        ];
        for (field, value) in factors {
            check(&mut found, "region", key, field, value, |v| v >= 0.0);
        }
    }

    let mut seen_credits = HashSet::new();
    for row in &document.credits {
        let key = row.id.as_str();
        if !seen_credits.insert(key) {
            found.push(ReferenceError::DuplicateCredit(key.to_string()));
        }
        check(&mut found, "credit", key, "price_per_ton_usd", row.price_per_ton_usd, |v| v > 0.0);
        check(&mut found, "credit", key, "available_tons", row.available_tons, |v| v >= 0.0);
    }

    found
}

/// First rule violation in `document`, if any
pub fn validate(document: &ReferenceDocument) -> Result<(), ReferenceError> {
    match issues(document).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check(
    found: &mut Vec<ReferenceError>,
    table: &'static str,
    key: &str,
    field: &'static str,
    value: f64,
    ok: impl Fn(f64) -> bool,
) {
    if !(value.is_finite() && ok(value)) {
        found.push(ReferenceError::OutOfRange {
            table,
            key: key.to_string(),
            field,
            value,
        });
    }
}
