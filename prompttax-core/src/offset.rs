//! Offset Converter
//!
//! Converts computed CO₂ into the metric tons carbon credits are priced in, and
//! prices a quantity against a credit listing. No validation is applied: zero
//! emissions quote at zero cost, and negative inputs pass through arithmetically.
//!
//! Quotes never touch a credit's `available_tons`; purchasing is out of scope.

use serde::{Deserialize, Serialize};

use crate::constants::engine::{GRAMS_PER_METRIC_TON, MIN_DISPLAY_COST_USD, MIN_DISPLAY_TONS};
use crate::format::to_fixed;
use crate::reference::CarbonCredit;
use crate::traits::ReferenceData;

/// Grams of CO₂ to metric tons
pub fn to_tons(co2_grams: f64) -> f64 {
    co2_grams / GRAMS_PER_METRIC_TON
}

/// Cost of offsetting `tons` at `price_per_ton_usd`
pub fn quote(tons: f64, price_per_ton_usd: f64) -> f64 {
    tons * price_per_ton_usd
}

/// Price of offsetting an amount of CO₂ with one credit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetQuote {
    pub credit_id: String,
    pub tons: f64,
    pub price_per_ton_usd: f64,
    pub cost_usd: f64,
}

impl OffsetQuote {
    /// Whether the listing has enough tons left to cover this quote
    pub fn covers(&self, credit: &CarbonCredit) -> bool {
        self.tons <= credit.available_tons
    }
}

/// Quote offsetting `co2_grams` with `credit`
pub fn quote_credit(co2_grams: f64, credit: &CarbonCredit) -> OffsetQuote {
    let tons = to_tons(co2_grams);
    OffsetQuote {
        credit_id: credit.id.clone(),
        tons,
        price_per_ton_usd: credit.price_per_ton_usd,
        cost_usd: quote(tons, credit.price_per_ton_usd),
    }
}

/// Quote every credit in the catalog, in listing order
pub fn quote_all<R: ReferenceData + ?Sized>(co2_grams: f64, reference: &R) -> Vec<OffsetQuote> {
    reference
        .credits()
        .iter()
        .map(|credit| quote_credit(co2_grams, credit))
        .collect()
}

/// Human text for an offset quantity
pub fn describe_tons(tons: f64) -> String {
    if tons < MIN_DISPLAY_TONS {
        "Less than 0.001 metric tons".to_string()
    } else {
        format!("{} metric tons", to_fixed(tons, 4))
    }
}

/// Human text for an offset cost
pub fn describe_cost(cost_usd: f64) -> String {
    if cost_usd < MIN_DISPLAY_COST_USD {
        "$<0.01".to_string()
    } else {
        format!("${}", to_fixed(cost_usd, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::builtin;

    #[test]
    fn grams_to_tons() {
        assert_eq!(to_tons(1_000_000.0), 1.0);
        assert_eq!(to_tons(0.0), 0.0);
        assert_eq!(to_tons(-2_000_000.0), -2.0);
    }

    #[test]
    fn quote_matches_direct_formula() {
        let co2 = 527_310.0;
        let price = 14.5;
        assert_eq!(quote(to_tons(co2), price), (co2 / 1_000_000.0) * price);
        assert_eq!(quote(to_tons(0.0), price), 0.0);
    }

    #[test]
    fn quote_credit_uses_listing_price() {
        let credit = builtin().credit("cc-002").unwrap();
        let q = quote_credit(2_000_000.0, credit);
        assert_eq!(q.credit_id, "cc-002");
        assert_eq!(q.tons, 2.0);
        assert_eq!(q.cost_usd, 17.5);
        assert!(q.covers(credit));
    }

    #[test]
    fn quote_all_follows_catalog_order() {
        let quotes = quote_all(1_000_000.0, builtin());
        let ids: Vec<_> = quotes.iter().map(|q| q.credit_id.as_str()).collect();
        assert_eq!(ids, ["cc-001", "cc-002", "cc-003", "cc-004", "cc-005", "cc-006"]);
        assert_eq!(quotes[3].cost_usd, 22.0);
    }

    #[test]
    fn quote_beyond_availability_is_flagged_not_refused() {
        let credit = builtin().credit("cc-004").unwrap();
        let q = quote_credit(9_000.0 * 1_000_000.0, credit);
        assert!(!q.covers(credit));
        assert_eq!(credit.available_tons, 8_000.0);
    }

    #[test]
    fn descriptions_floor_small_amounts() {
        assert_eq!(describe_tons(0.0004), "Less than 0.001 metric tons");
        assert_eq!(describe_tons(0.01234), "0.0123 metric tons");
        assert_eq!(describe_cost(0.004), "$<0.01");
        assert_eq!(describe_cost(3.456), "$3.46");
    }

    #[test]
    fn descriptions_round_halves_up() {
        assert_eq!(describe_tons(0.031_25), "0.0313 metric tons");
        assert_eq!(describe_cost(0.125), "$0.13");
        assert_eq!(describe_cost(2.375), "$2.38");
    }
}
