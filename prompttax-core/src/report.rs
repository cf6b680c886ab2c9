//! Report export
//!
//! Flat comma-separated export of a result's breakdown:
//!
//! ```csv
//! Category,Minutes Per Day,Monthly CO2 (g),Monthly kWh,Monthly Water (L)
//! AI Chatbots,45,526.50,1.3500,2.97
//! ```
//!
//! The minutes column divides the period-scaled `minutes_used` by 30 whatever
//! the result's period, so it is exact only for monthly results. Existing
//! exports depend on this, so it is kept as is.
//!
//! Minutes print in shortest round-trip form and never switch to exponent
//! notation, so a vanishingly small value reads `0.0000001` rather than `1e-7`.
//! The measure columns go through [`to_fixed`], which rounds exact ties away
//! from zero.

use std::fmt::Write as _;

use serde::Serialize;

use crate::calculator::{Calculator, ImpactResult};
use crate::constants::EXPORT_MINUTES_DIVISOR;
use crate::errors::EngineResult;
use crate::format::{format_value, to_fixed, FormattedValue, UnitFamily};
use crate::traits::ReferenceData;
use crate::types::{Period, UsageEntry};

/// Suggested download name for [`export_csv`] output
pub const EXPORT_FILE_NAME: &str = "prompttax-report.csv";

/// Header row of the CSV export
pub const CSV_HEADER: &str = "Category,Minutes Per Day,Monthly CO2 (g),Monthly kWh,Monthly Water (L)";

/// Render `result`'s breakdown as CSV.
///
/// Rows are newline-separated with no trailing newline. Categories missing from
/// the tables are labelled by id. Minutes use plain decimal notation at any
/// magnitude.
pub fn export_csv<R: ReferenceData + ?Sized>(result: &ImpactResult, reference: &R) -> String {
    let mut csv = String::with_capacity(CSV_HEADER.len() + 64 * result.breakdown.len());
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for (i, slice) in result.breakdown.iter().enumerate() {
        if i > 0 {
            csv.push('\n');
        }
        let label = reference
            .category(slice.category)
            .map(|c| c.label.as_str())
            .unwrap_or_else(|| slice.category.id());

        // Writing into a String cannot fail
        let _ = write!(
            csv,
            "{},{},{},{},{}",
            label,
            slice.minutes_used / EXPORT_MINUTES_DIVISOR,
            to_fixed(slice.co2_grams, 2),
            to_fixed(slice.electricity_kwh, 4),
            to_fixed(slice.water_liters, 2),
        );
    }

    csv
}

/// Monthly and annual views shown on the reports screen
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub monthly: ImpactResult,
    pub annual: ImpactResult,
    pub monthly_co2: FormattedValue,
    pub annual_co2: FormattedValue,
}

impl ReportSummary {
    pub fn build<R: ReferenceData + ?Sized>(
        calculator: &Calculator<'_, R>,
        entries: &[UsageEntry],
        region_code: &str,
    ) -> EngineResult<Self> {
        let monthly = calculator.calculate(entries, region_code, Period::Monthly)?;
        let annual = calculator.calculate(entries, region_code, Period::Annual)?;

        Ok(Self {
            monthly_co2: format_value(monthly.co2_grams, UnitFamily::Grams),
            annual_co2: format_value(annual.co2_grams, UnitFamily::Grams),
            monthly,
            annual,
        })
    }

    /// CSV export of the monthly breakdown
    pub fn to_csv<R: ReferenceData + ?Sized>(&self, reference: &R) -> String {
        export_csv(&self.monthly, reference)
    }
}
