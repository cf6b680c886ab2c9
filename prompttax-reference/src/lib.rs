//! Loadable Reference Tables and Configuration
//!
//! ## Overview
//!
//! The engine in `prompttax-core` reads its coefficients through the
//! [`ReferenceData`](prompttax_core::ReferenceData) trait and ships a compiled-in
//! table set. This crate lets those tables travel as JSON documents instead, so
//! coefficients can be refreshed (a new grid-intensity year, a new credit
//! listing) without a rebuild.
//!
//! ## Reference Documents
//!
//! A document bundles all three tables under a content version:
//!
//! ```json
//! {
//!   "version": "2024.2",
//!   "categories": [
//!     { "category": "chatbots", "label": "AI Chatbots",
//!       "description": "...", "avg_watts_per_minute": 0.05 }
//!   ],
//!   "regions": [
//!     { "region_code": "US", "region_name": "United States (Average)",
//!       "country": "United States", "grid_intensity_g_co2_per_kwh": 390.0,
//!       "water_liters_per_kwh": 2.2, "pm25_factor_mg_per_kwh": 18.0,
//!       "so2_factor_mg_per_kwh": 420.0, "nox_factor_mg_per_kwh": 320.0,
//!       "pue_multiplier": 1.2 }
//!   ],
//!   "credits": []
//! }
//! ```
//!
//! Documents are validated before a registry will serve them: a table that
//! would let the calculator produce negative or nonsensical figures is rejected
//! up front rather than surfacing as odd numbers on a dashboard.
//!
//! ## Configuration
//!
//! [`AppConfig`] names the user's region, the default period, user settings and
//! optionally a reference document to load in place of the built-in tables.
//!
//! ## Usage Example
//!
//! ```no_run
//! use prompttax_core::Calculator;
//! use prompttax_reference::AppConfig;
//!
//! let config = AppConfig::load("prompttax.json")?;
//! let registry = config.registry()?;
//!
//! let calculator = Calculator::new(&registry);
//! let result = calculator.calculate(&[], &config.region, config.default_period)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::PathBuf;

use prompttax_core::Category;

pub mod config;
pub mod document;
pub mod registry;
pub mod validation;

pub use config::AppConfig;
pub use document::ReferenceDocument;
pub use registry::ReferenceRegistry;
pub use validation::validate;

/// Result type for reference loading
pub type ReferenceResult<T> = Result<T, ReferenceError>;

/// Reference-table and configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(Category),

    #[error("Duplicate region code: {0}")]
    DuplicateRegion(String),

    #[error("Duplicate credit id: {0}")]
    DuplicateCredit(String),

    #[error("{table} '{key}': {field} = {value} is out of range")]
    OutOfRange {
        table: &'static str,
        key: String,
        field: &'static str,
        value: f64,
    },

    #[error("Region '{0}' is not in the reference tables")]
    UnknownRegion(String),
}

impl ReferenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
