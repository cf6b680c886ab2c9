//! Calendar Source Abstraction
//!
//! The trend generator labels each point with a calendar date counted back from
//! "today". Reading today's date through this trait keeps the generator
//! testable: tests pin the date with `FixedClock`.
//!
//! ## Example Implementation
//!
//! ```rust
//! use chrono::NaiveDate;
//! use prompttax_core::traits::Clock;
//!
//! struct ReportDate(NaiveDate);
//!
//! impl Clock for ReportDate {
//!     fn today(&self) -> NaiveDate {
//!         self.0
//!     }
//! }
//! ```

use chrono::NaiveDate;

/// Source of the current calendar date
pub trait Clock {
    /// Today's date
    fn today(&self) -> NaiveDate;
}
