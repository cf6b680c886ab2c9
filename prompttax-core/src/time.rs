//! Calendar sources
//!
//! Provides clock implementations for dating trend series:
//! - System clock (UTC calendar date)
//! - Fixed clock (tests, reproducible reports)

use chrono::{Days, NaiveDate, Utc};

use crate::traits::Clock;

/// Today's UTC date from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a chosen date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Move forward by `days`, saturating at the calendar maximum
    pub fn advance_days(&mut self, days: u64) {
        self.date = self.date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
