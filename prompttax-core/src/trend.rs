//! Synthetic Trend Generator
//!
//! Produces a demonstration history for the dashboard trend chart. This is not
//! real historical data: each day re-runs the calculator on the profile scaled
//! by a random factor.
//!
//! ## Series Shape
//!
//! ```text
//! for i in (days-1) down to 0:
//!     date   = today - i
//!     factor ~ U[0.8, 1.2)            (one draw per day, applied to every entry)
//!     result = calculate(profile × factor, region, daily)
//!     point  = { date, co2: 2 dp, kwh: 4 dp, water: 2 dp }
//! ```
//!
//! The series is oldest-first, ends today and has exactly `days` points. A
//! request reaching back before the earliest representable date is cut short
//! at that date, so dates stay unique and strictly increasing.
//!
//! ## Randomness
//!
//! The factor comes from a [`VarianceSource`]. [`generate_series`] seeds a fresh
//! `ChaCha8Rng` from OS entropy on every call, so concurrent callers never share
//! a stream. Tests seed the generator or use [`ConstantVariance`] to assert exact
//! output.

use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::calculator::Calculator;
use crate::constants::trend::{CO2_WATER_ROUNDING, KWH_ROUNDING, VARIANCE_MAX, VARIANCE_MIN};
use crate::errors::{EngineResult, ImpactError};
use crate::reference::builtin;
use crate::time::SystemClock;
use crate::traits::{Clock, ReferenceData, VarianceSource};
use crate::types::{Period, UsageEntry};

/// One day of a synthetic trend series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Grams CO₂, rounded to 2 decimals
    pub co2: f64,
    /// Kilowatt-hours, rounded to 4 decimals
    pub kwh: f64,
    /// Liters, rounded to 2 decimals
    pub water: f64,
}

/// Uniform variance drawn from any `rand` generator
#[derive(Debug, Clone)]
pub struct RngVariance<R> {
    rng: R,
}

impl<R: Rng> RngVariance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngVariance<ChaCha8Rng> {
    /// Independent stream seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Reproducible stream
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> VarianceSource for RngVariance<R> {
    fn next_factor(&mut self) -> f64 {
        self.rng.gen_range(VARIANCE_MIN..VARIANCE_MAX)
    }
}

/// Same factor every day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVariance(pub f64);

impl VarianceSource for ConstantVariance {
    fn next_factor(&mut self) -> f64 {
        self.0
    }
}

/// Trend generator over a calculator, clock and variance source
pub struct TrendGenerator<'r, R: ReferenceData + ?Sized, C, V> {
    calculator: Calculator<'r, R>,
    clock: C,
    variance: V,
}

impl<'r, R, C, V> TrendGenerator<'r, R, C, V>
where
    R: ReferenceData + ?Sized,
    C: Clock,
    V: VarianceSource,
{
    pub fn new(calculator: Calculator<'r, R>, clock: C, variance: V) -> Self {
        Self {
            calculator,
            clock,
            variance,
        }
    }

    /// Generate `days` points ending today, oldest first.
    ///
    /// An unknown region fails before any variance is drawn. Fewer than `days`
    /// points come back only when the calendar runs out before `today - days`.
    pub fn generate(
        &mut self,
        entries: &[UsageEntry],
        region_code: &str,
        days: u32,
    ) -> EngineResult<Vec<TrendPoint>> {
        if self.calculator.reference().region(region_code).is_none() {
            return Err(ImpactError::unknown_region(region_code));
        }

        let today = self.clock.today();
        let available = today.signed_duration_since(NaiveDate::MIN).num_days() + 1;
        let count = i64::from(days).min(available);
        if count < i64::from(days) {
            log::warn!(
                "trend of {} days from {} reaches past the calendar start, keeping {}",
                days,
                today,
                count
            );
        }
        if count <= 0 {
            return Ok(Vec::new());
        }

        let Some(start) = today.checked_sub_days(Days::new(count as u64 - 1)) else {
            return Ok(Vec::new());
        };
        let count = count as usize;
        let mut series = Vec::with_capacity(count.min(MAX_PREALLOCATED_POINTS));

        for date in start.iter_days().take(count) {
            let factor = self.variance.next_factor();
            let varied: Vec<UsageEntry> = entries.iter().map(|e| e.scaled(factor)).collect();
            let result = self.calculator.calculate(&varied, region_code, Period::Daily)?;

            series.push(TrendPoint {
                date,
                co2: round_to(result.co2_grams, CO2_WATER_ROUNDING),
                kwh: round_to(result.electricity_kwh, KWH_ROUNDING),
                water: round_to(result.water_liters, CO2_WATER_ROUNDING),
            });
        }

        log::debug!(
            "generated {}-day trend for region '{}' ending {}",
            days,
            region_code,
            today
        );

        Ok(series)
    }
}

// Longer series grow on demand
const MAX_PREALLOCATED_POINTS: usize = 366;

fn round_to(value: f64, scale: f64) -> f64 {
    (value * scale).round() / scale
}

/// Synthetic series from the built-in tables, today's date and fresh entropy
pub fn generate_series(
    entries: &[UsageEntry],
    region_code: &str,
    days: u32,
) -> EngineResult<Vec<TrendPoint>> {
    TrendGenerator::new(
        Calculator::new(builtin()),
        SystemClock,
        RngVariance::from_entropy(),
    )
    .generate(entries, region_code, days)
}
