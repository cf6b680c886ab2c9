//! Region comparison
//!
//! Regions are independent coefficient sets: no ordering between them is
//! assumed, so comparisons are always computed by running the same profile
//! through each region.

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, ImpactResult};
use crate::errors::EngineResult;
use crate::traits::ReferenceData;
use crate::types::{Period, UsageEntry};

/// The same profile evaluated in two regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionComparison {
    pub primary: ImpactResult,
    pub other: ImpactResult,
    /// other − primary
    pub co2_delta_grams: f64,
    pub kwh_delta: f64,
    pub water_delta_liters: f64,
    /// other / primary CO₂, `None` when the primary emits nothing
    pub co2_ratio: Option<f64>,
}

pub fn compare_regions<R: ReferenceData + ?Sized>(
    calculator: &Calculator<'_, R>,
    entries: &[UsageEntry],
    primary: &str,
    other: &str,
    period: Period,
) -> EngineResult<RegionComparison> {
    let primary = calculator.calculate(entries, primary, period)?;
    let other = calculator.calculate(entries, other, period)?;

    let co2_ratio = (primary.co2_grams > 0.0).then(|| other.co2_grams / primary.co2_grams);

    Ok(RegionComparison {
        co2_delta_grams: other.co2_grams - primary.co2_grams,
        kwh_delta: other.electricity_kwh - primary.electricity_kwh,
        water_delta_liters: other.water_liters - primary.water_liters,
        co2_ratio,
        primary,
        other,
    })
}

/// Every known region with the profile's CO₂ there, lowest first.
///
/// Ties keep table order.
pub fn rank_regions<R: ReferenceData + ?Sized>(
    calculator: &Calculator<'_, R>,
    entries: &[UsageEntry],
    period: Period,
) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = calculator
        .reference()
        .regions()
        .iter()
        .filter_map(|region| {
            calculator
                .calculate(entries, &region.region_code, period)
                .ok()
                .map(|result| (region.region_code.clone(), result.co2_grams))
        })
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}
