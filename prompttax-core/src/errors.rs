//! Error Types for the Impact Engine
//!
//! ## Design Philosophy
//!
//! The engine is a pure transform, so it has very little that can go wrong:
//!
//! 1. **One Engine Error**: `ImpactError::UnknownRegion` is the only failure a
//!    calculation can produce. It surfaces synchronously to the caller, is never
//!    retried, and no partial result is returned alongside it.
//!
//! 2. **Silent Degradation Elsewhere**: Empty profiles, zero minutes and entries
//!    whose category has no coefficient all produce a (possibly zero) result
//!    rather than an error.
//!
//! 3. **Boundary Rejection**: Strings that should name a period, category or unit
//!    family are parsed at the edge of the library. A bad string is an
//!    `InputError` and never reaches `calculate`.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use prompttax_core::{calculate_impact, ImpactError, Period};
//!
//! match calculate_impact(&[], "XX-NOPE", Period::Daily) {
//!     Ok(result) => println!("{} g CO2", result.co2_grams),
//!     Err(ImpactError::UnknownRegion { code }) => {
//!         // Caller owns the user-visible message
//!         eprintln!("region {code} is not supported");
//!     }
//! }
//! ```

use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, ImpactError>;

/// Failures raised by the calculation engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImpactError {
    /// The region code has no matching coefficient row
    #[error("Unknown region: {code}")]
    UnknownRegion {
        /// The code that failed to resolve
        code: String,
    },
}

impl ImpactError {
    pub(crate) fn unknown_region(code: &str) -> Self {
        Self::UnknownRegion {
            code: code.to_string(),
        }
    }
}

/// Failures parsing caller-supplied strings into engine enums
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Period name outside daily/weekly/monthly/annual
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    /// Category id that is not one of the five tracked categories
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unit family name that the formatter does not know
    #[error("Unknown unit family: {0}")]
    UnknownUnitFamily(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_region_message_names_code() {
        let err = ImpactError::unknown_region("XX-NOPE");
        assert_eq!(err.to_string(), "Unknown region: XX-NOPE");
    }

    #[test]
    fn input_errors_display() {
        assert_eq!(
            InputError::UnknownPeriod("hourly".into()).to_string(),
            "Unknown period: hourly"
        );
        assert_eq!(
            InputError::UnknownCategory("ai_music".into()).to_string(),
            "Unknown category: ai_music"
        );
    }
}
