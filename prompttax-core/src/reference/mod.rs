//! Reference Coefficient Tables
//!
//! ## Model Background
//!
//! The impact model needs two kinds of coefficient:
//!
//! ```text
//! Category  → average server-side watts per active user-minute
//! Region    → grid intensity (g CO₂/kWh), water (L/kWh),
//!             PM2.5 / SO₂ / NOx (mg/kWh), datacenter PUE
//! ```
//!
//! A third table lists purchasable carbon credits for the offset store.
//!
//! All values are approximations from published datacenter and grid data (IEA,
//! EPA, EU emission factors). They are versioned by content: replacing a table
//! replaces the numbers, there is no schema evolution.
//!
//! ## Table Design
//!
//! Rows are plain owned structs so the same types can be compiled in
//! ([`builtin`]) or deserialized from JSON by the reference crate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::traits::ReferenceData;
use crate::types::Category;

mod tables;

pub use tables::{builtin, BuiltinReference};

/// Power coefficient and display metadata for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoefficient {
    pub category: Category,
    pub label: String,
    pub description: String,
    /// Server-side power draw per active user-minute
    pub avg_watts_per_minute: f64,
}

/// Environmental coefficients for one supported region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCoefficient {
    /// Unique lookup key, e.g. "US-CA"
    pub region_code: String,
    pub region_name: String,
    pub country: String,
    /// Grams CO₂ per kWh delivered by the grid mix
    pub grid_intensity_g_co2_per_kwh: f64,
    /// Liters of water per kWh (cooling + generation)
    pub water_liters_per_kwh: f64,
    pub pm25_factor_mg_per_kwh: f64,
    pub so2_factor_mg_per_kwh: f64,
    pub nox_factor_mg_per_kwh: f64,
    /// Datacenter overhead, always ≥ 1
    pub pue_multiplier: f64,
}

/// Purchasable carbon credit listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonCredit {
    pub id: String,
    pub project_name: String,
    pub project_type: String,
    pub verification_standard: String,
    pub vintage: u16,
    pub region: String,
    pub price_per_ton_usd: f64,
    pub description: String,
    pub available_tons: f64,
}

/// Group regions by country.
///
/// Countries appear in order of their first region in the table; regions keep
/// table order within each country.
pub fn regions_by_country<R: ReferenceData + ?Sized>(
    reference: &R,
) -> Vec<(String, Vec<&RegionCoefficient>)> {
    let mut groups: Vec<(String, Vec<&RegionCoefficient>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for region in reference.regions() {
        match index.get(region.country.as_str()) {
            Some(&i) => groups[i].1.push(region),
            None => {
                index.insert(region.country.as_str(), groups.len());
                groups.push((region.country.clone(), vec![region]));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn united_states_groups_three_regions() {
        let groups = regions_by_country(builtin());
        let (country, regions) = &groups[0];
        assert_eq!(country, "United States");
        let codes: Vec<_> = regions.iter().map(|r| r.region_code.as_str()).collect();
        assert_eq!(codes, ["US", "US-CA", "US-TX"]);
    }

    #[test]
    fn every_country_appears_once() {
        let groups = regions_by_country(builtin());
        let total: usize = groups.iter().map(|(_, r)| r.len()).sum();
        assert_eq!(total, builtin().regions().len());
        assert_eq!(groups.len(), 11);
    }
}
