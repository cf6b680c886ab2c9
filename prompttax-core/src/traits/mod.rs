//! Core Traits and Abstractions for PromptTax
//!
//! The engine itself is a set of pure functions. These traits mark the three
//! places where it reaches outside its inputs:
//!
//! - [`reference`] - Read-only coefficient tables (categories, regions, credits)
//! - [`time`] - Today's calendar date, for trend series
//! - [`variance`] - Random usage variance, for trend series
//!
//! Each seam can be swapped for a fixed implementation in tests, which makes
//! even the synthetic trend output exactly assertable.
//!
//! ## Usage Example
//!
//! ```rust
//! use prompttax_core::traits::ReferenceData;
//! use prompttax_core::reference::builtin;
//!
//! let tables = builtin();
//! let us = tables.region("US").expect("built-in region");
//! assert_eq!(us.pue_multiplier, 1.2);
//! ```

pub mod reference;
pub mod time;
pub mod variance;

pub use reference::ReferenceData;
pub use time::Clock;
pub use variance::VarianceSource;
