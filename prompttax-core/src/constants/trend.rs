//! Trend Generation Constants

/// Lower bound of the per-day multiplicative usage variance.
pub const VARIANCE_MIN: f64 = 0.8;

/// Upper bound of the per-day multiplicative usage variance (exclusive).
pub const VARIANCE_MAX: f64 = 1.2;

/// Length of the dashboard trend chart in days.
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Scale used to round CO₂ grams and water liters to 2 decimals.
pub const CO2_WATER_ROUNDING: f64 = 100.0;

/// Scale used to round kilowatt-hours to 4 decimals.
pub const KWH_ROUNDING: f64 = 10_000.0;
