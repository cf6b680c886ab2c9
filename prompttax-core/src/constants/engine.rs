//! Engine Constants
//!
//! Scalars baked into the impact model. Changing any of these changes every
//! published number, so they are fixed rather than configurable.

// ===== ENERGY MODEL =====

/// Divisor applied to `watts_per_minute × minutes × PUE`.
///
/// The category coefficients are published on a scale where the watt-minute to
/// kilowatt-hour conversion is already partly folded in. Dividing by 60 is the
/// only remaining step; re-deriving the conversion from first principles would
/// break compatibility with the coefficient tables.
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ===== UNCERTAINTY =====

/// Fixed ± percentage attached to every result.
///
/// Not computed from input variance. Reflects the spread of published
/// per-query energy estimates.
pub const UNCERTAINTY_PCT: f64 = 35.0;

// ===== OFFSETS =====

/// Grams of CO₂ in one metric ton (the unit carbon credits are priced in).
pub const GRAMS_PER_METRIC_TON: f64 = 1_000_000.0;

/// Offset quantities below this are shown as "less than" rather than a number.
pub const MIN_DISPLAY_TONS: f64 = 0.001;

/// Costs below this are shown as "<0.01" rather than a number.
pub const MIN_DISPLAY_COST_USD: f64 = 0.01;

// ===== REPORT EXPORT =====

/// Divisor turning a period-scaled `minutes_used` back into minutes per day.
///
/// Exact for monthly exports only. Other periods reproduce the same
/// approximation for compatibility with existing exports.
pub const EXPORT_MINUTES_DIVISOR: f64 = 30.0;
