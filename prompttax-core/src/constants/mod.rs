//! Constants for the PromptTax Engine
//!
//! This module centralizes every fixed number the engine depends on. The
//! calculator, formatter and trend generator must reproduce these exact scalars
//! to stay numerically compatible with the published coefficient tables.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Engine**: Unit conversions and the fixed uncertainty band
//! - **Units**: Display thresholds for the unit formatter
//! - **Trend**: Variance band and rounding for synthetic series
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Group related constants together

/// Unit conversions and fixed model parameters.
pub mod engine;

/// Threshold ladders for human-scaled display units.
pub mod units;

/// Synthetic trend generation parameters.
pub mod trend;

// Re-export commonly used constants for convenience
pub use engine::{
    UNCERTAINTY_PCT, MINUTES_PER_HOUR, GRAMS_PER_METRIC_TON, EXPORT_MINUTES_DIVISOR,
};

pub use trend::{VARIANCE_MIN, VARIANCE_MAX, DEFAULT_TREND_DAYS};
