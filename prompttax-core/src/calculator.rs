//! Impact Calculator
//!
//! ## Model
//!
//! For each usage entry, in input order:
//!
//! ```text
//! daily_kWh  = (watts_per_minute × minutes_per_day × PUE) / 60
//! period_kWh = daily_kWh × period_multiplier        (1, 7, 30, 365)
//! CO₂ (g)    = period_kWh × grid_intensity
//! water (L)  = period_kWh × water_per_kWh
//! ```
//!
//! The per-entry slices are appended to the breakdown and accumulated into
//! running totals. Pollutants are derived afterwards from the aggregate energy:
//!
//! ```text
//! PM2.5 / SO₂ / NOx (mg) = total_kWh × factor_mg_per_kWh
//! ```
//!
//! so they are linear in total energy whatever the category mix.
//!
//! ## Properties
//!
//! - Deterministic: identical inputs and tables give bit-identical results
//! - Linear: doubling every `minutes_per_day` doubles every aggregate
//! - Additive: totals are the exact running sums of the breakdown slices
//! - Total: the only failure is an unknown region code

use serde::{Deserialize, Serialize};

use crate::constants::{MINUTES_PER_HOUR, UNCERTAINTY_PCT};
use crate::errors::{EngineResult, ImpactError};
use crate::reference::builtin;
use crate::traits::ReferenceData;
use crate::types::{Category, Period, UsageEntry};

/// Per-category slice of an impact result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryImpact {
    pub category: Category,
    /// Minutes over the whole period (daily minutes × multiplier)
    pub minutes_used: f64,
    pub electricity_kwh: f64,
    pub co2_grams: f64,
    pub water_liters: f64,
}

/// Environmental impact of a usage profile over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub electricity_kwh: f64,
    pub co2_grams: f64,
    pub water_liters: f64,
    pub pm25_mg: f64,
    pub so2_mg: f64,
    pub nox_mg: f64,
    pub period: Period,
    pub region: String,
    /// One slice per recognized entry, in input order
    pub breakdown: Vec<CategoryImpact>,
    /// Fixed ± percentage band
    pub uncertainty_pct: f64,
}

impl ImpactResult {
    /// Low and high ends of the uncertainty band around `value`
    pub fn uncertainty_range(&self, value: f64) -> (f64, f64) {
        let band = self.uncertainty_pct / 100.0;
        (value * (1.0 - band), value * (1.0 + band))
    }

    /// Breakdown slice for a category, if the profile had one
    pub fn slice(&self, category: Category) -> Option<&CategoryImpact> {
        self.breakdown.iter().find(|b| b.category == category)
    }
}

/// Impact calculator bound to a set of reference tables
pub struct Calculator<'r, R: ReferenceData + ?Sized> {
    reference: &'r R,
}

// Manual impls: a shared reference is Copy whatever `R` is
impl<R: ReferenceData + ?Sized> Clone for Calculator<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ReferenceData + ?Sized> Copy for Calculator<'_, R> {}

impl<'r, R: ReferenceData + ?Sized> Calculator<'r, R> {
    pub fn new(reference: &'r R) -> Self {
        Self { reference }
    }

    /// Tables this calculator reads from
    pub fn reference(&self) -> &'r R {
        self.reference
    }

    /// Compute the impact of `entries` in `region_code` over `period`.
    ///
    /// Entries whose category has no coefficient in the tables are skipped.
    /// Fails only when `region_code` does not resolve.
    pub fn calculate(
        &self,
        entries: &[UsageEntry],
        region_code: &str,
        period: Period,
    ) -> EngineResult<ImpactResult> {
        let region = self.reference.region(region_code).ok_or_else(|| {
            log::warn!("impact lookup failed for region '{}'", region_code);
            ImpactError::unknown_region(region_code)
        })?;

        let multiplier = period.multiplier();
        let mut breakdown = Vec::with_capacity(entries.len());

        let mut total_kwh = 0.0;
        let mut total_co2 = 0.0;
        let mut total_water = 0.0;

        for entry in entries {
            let Some(coeff) = self.reference.category(entry.category) else {
                log::debug!("no coefficient for category '{}', skipping", entry.category);
                continue;
            };

            let daily_kwh = (coeff.avg_watts_per_minute * entry.minutes_per_day * region.pue_multiplier)
                / MINUTES_PER_HOUR;

            let period_kwh = daily_kwh * multiplier;
            let period_co2 = period_kwh * region.grid_intensity_g_co2_per_kwh;
            let period_water = period_kwh * region.water_liters_per_kwh;

            breakdown.push(CategoryImpact {
                category: entry.category,
                minutes_used: entry.minutes_per_day * multiplier,
                electricity_kwh: period_kwh,
                co2_grams: period_co2,
                water_liters: period_water,
            });

            total_kwh += period_kwh;
            total_co2 += period_co2;
            total_water += period_water;
        }

        Ok(ImpactResult {
            electricity_kwh: total_kwh,
            co2_grams: total_co2,
            water_liters: total_water,
            pm25_mg: total_kwh * region.pm25_factor_mg_per_kwh,
            so2_mg: total_kwh * region.so2_factor_mg_per_kwh,
            nox_mg: total_kwh * region.nox_factor_mg_per_kwh,
            period,
            region: region_code.to_string(),
            breakdown,
            uncertainty_pct: UNCERTAINTY_PCT,
        })
    }
}

/// Calculate against the built-in reference tables
pub fn calculate_impact(
    entries: &[UsageEntry],
    region_code: &str,
    period: Period,
) -> EngineResult<ImpactResult> {
    Calculator::new(builtin()).calculate(entries, region_code, period)
}
