//! Property tests for the impact model
//!
//! These check the algebraic guarantees the engine makes for every profile and
//! region, not just hand-picked fixtures:
//!
//! - Linearity in usage
//! - Flat period scaling
//! - Idempotence and additivity
//! - Strict monotonicity in any entry's minutes
//! - Offset and formatter invariants

mod common;

use proptest::prelude::*;

use common::*;
use prompttax_core::{
    calculate_impact, format_value, offset, ImpactResult, Period, UnitFamily, UsageEntry,
};

fn doubled(entries: &[UsageEntry]) -> Vec<UsageEntry> {
    entries.iter().map(|e| e.scaled(2.0)).collect()
}

fn aggregates(result: &ImpactResult) -> [f64; 6] {
    [
        result.electricity_kwh,
        result.co2_grams,
        result.water_liters,
        result.pm25_mg,
        result.so2_mg,
        result.nox_mg,
    ]
}

proptest! {
    #[test]
    fn doubling_minutes_doubles_every_aggregate(
        entries in partial_profile(),
        region in region_code(),
    ) {
        let base = calculate_impact(&entries, region, Period::Daily).unwrap();
        let twice = calculate_impact(&doubled(&entries), region, Period::Daily).unwrap();

        for (b, t) in aggregates(&base).into_iter().zip(aggregates(&twice)) {
            prop_assert!(approx_eq(t, 2.0 * b), "{} vs 2 × {}", t, b);
        }
    }

    #[test]
    fn periods_scale_daily_result(
        entries in full_profile(),
        region in region_code(),
    ) {
        let daily = calculate_impact(&entries, region, Period::Daily).unwrap();

        for period in [Period::Weekly, Period::Monthly, Period::Annual] {
            let scaled = calculate_impact(&entries, region, period).unwrap();
            let m = period.multiplier();
            for (d, s) in aggregates(&daily).into_iter().zip(aggregates(&scaled)) {
                prop_assert!(approx_eq(s, m * d), "{:?}: {} vs {} × {}", period, s, m, d);
            }
        }
    }

    #[test]
    fn identical_calls_are_bit_identical(
        entries in partial_profile(),
        region in region_code(),
    ) {
        let first = calculate_impact(&entries, region, Period::Monthly).unwrap();
        let second = calculate_impact(&entries, region, Period::Monthly).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn totals_are_running_sums(
        entries in full_profile(),
        region in region_code(),
    ) {
        let result = calculate_impact(&entries, region, Period::Annual).unwrap();

        let (mut kwh, mut co2, mut water) = (0.0, 0.0, 0.0);
        for slice in &result.breakdown {
            kwh += slice.electricity_kwh;
            co2 += slice.co2_grams;
            water += slice.water_liters;
        }

        prop_assert_eq!(result.electricity_kwh, kwh);
        prop_assert_eq!(result.co2_grams, co2);
        prop_assert_eq!(result.water_liters, water);
        prop_assert_eq!(result.breakdown.len(), entries.len());
    }

    #[test]
    fn more_minutes_strictly_increase_aggregates(
        entries in full_profile(),
        index in 0usize..5,
        extra in 1.0..120.0f64,
        region in region_code(),
    ) {
        let mut bumped = entries.clone();
        bumped[index].minutes_per_day += extra;

        let base = calculate_impact(&entries, region, Period::Daily).unwrap();
        let more = calculate_impact(&bumped, region, Period::Daily).unwrap();

        for (b, m) in aggregates(&base).into_iter().zip(aggregates(&more)) {
            prop_assert!(m > b);
        }
    }

    #[test]
    fn non_negative_inputs_give_non_negative_outputs(
        entries in partial_profile(),
        region in region_code(),
    ) {
        let result = calculate_impact(&entries, region, Period::Weekly).unwrap();
        prop_assert!(aggregates(&result).iter().all(|v| *v >= 0.0));
    }

    #[test]
    fn offset_quote_round_trip(co2 in 0.0..1e9f64, price in 0.0..100.0f64) {
        let cost = offset::quote(offset::to_tons(co2), price);
        prop_assert_eq!(cost, (co2 / 1_000_000.0) * price);
    }

    #[test]
    fn grams_below_kilo_threshold_stay_in_grams(value in 0.0..999.9f64) {
        prop_assert_eq!(format_value(value, UnitFamily::Grams).unit, "g");
    }

    #[test]
    fn liters_at_or_above_threshold_escalate(value in 1_000.0..1e7f64) {
        prop_assert_eq!(format_value(value, UnitFamily::Liters).unit, "kL");
    }
}

#[test]
fn unit_boundaries_are_inclusive() {
    let cases = [
        (999.0, UnitFamily::Grams, "999.0", "g"),
        (1_000.0, UnitFamily::Grams, "1.0", "kg"),
        (1_000_000.0, UnitFamily::Grams, "1.00", "t"),
        (999.0, UnitFamily::Milligrams, "999.0", "mg"),
        (1_000.0, UnitFamily::Milligrams, "1.0", "g"),
        (1_000_000.0, UnitFamily::Milligrams, "1.00", "kg"),
        (1_000.0, UnitFamily::Liters, "1.0", "kL"),
        (999.0, UnitFamily::KilowattHours, "999.000", "kWh"),
        (1_000.0, UnitFamily::KilowattHours, "1.00", "MWh"),
    ];

    for (value, family, text, unit) in cases {
        let formatted = format_value(value, family);
        assert_eq!((formatted.value.as_str(), formatted.unit), (text, unit), "{value} {family:?}");
    }
}
