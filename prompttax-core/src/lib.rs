//! Impact calculation engine for PromptTax
//!
//! Estimates the environmental footprint of AI tool usage (electricity, CO₂,
//! water, air pollutants) from per-category power coefficients and per-region
//! environmental coefficients.
//!
//! Key properties:
//! - Pure and deterministic: no hidden state, no I/O
//! - Linear in usage, scaled flatly by period
//! - One failure mode: an unknown region code
//!
//! ```no_run
//! use prompttax_core::{calculate_impact, demo_profile, format_value, Period, UnitFamily};
//!
//! let result = calculate_impact(&demo_profile(), "US", Period::Monthly)?;
//! let co2 = format_value(result.co2_grams, UnitFamily::Grams);
//! println!("{co2} CO₂ ±{}%", result.uncertainty_pct);
//! # Ok::<(), prompttax_core::ImpactError>(())
//! ```

#![deny(unsafe_code)]

pub mod budget;
pub mod calculator;
pub mod compare;
pub mod constants;
pub mod errors;
pub mod format;
pub mod offset;
pub mod reference;
pub mod report;
pub mod scenario;
pub mod time;
pub mod traits;
pub mod trend;
pub mod types;

// Public API
pub use calculator::{calculate_impact, Calculator, CategoryImpact, ImpactResult};
pub use errors::{EngineResult, ImpactError, InputError};
pub use format::{format_value, FormattedValue, UnitFamily};
pub use offset::{quote, to_tons, OffsetQuote};
pub use reference::{builtin, CarbonCredit, CategoryCoefficient, RegionCoefficient};
pub use traits::{Clock, ReferenceData, VarianceSource};
pub use trend::{generate_series, TrendGenerator, TrendPoint};
pub use types::{demo_profile, Category, Period, UsageEntry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
