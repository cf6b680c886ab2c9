//! Display Unit Thresholds
//!
//! Every unit family escalates at the same two magnitudes. The comparison is
//! inclusive: a value exactly at a threshold is shown in the larger unit.

/// Values at or above this move up one unit (g → kg, mg → g, L → kL, kWh → MWh).
pub const KILO_THRESHOLD: f64 = 1_000.0;

/// Values at or above this move up two units (g → t, mg → kg).
pub const MEGA_THRESHOLD: f64 = 1_000_000.0;
