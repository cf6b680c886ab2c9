//! Serialized reference table bundle

use serde::{Deserialize, Serialize};

use prompttax_core::{builtin, CarbonCredit, CategoryCoefficient, ReferenceData, RegionCoefficient};

/// Content version reported for the compiled-in tables
pub const BUILTIN_VERSION: &str = "builtin";

/// Category, region and carbon-credit tables under one content version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    pub version: String,
    pub categories: Vec<CategoryCoefficient>,
    pub regions: Vec<RegionCoefficient>,
    /// Optional; a document without credits simply quotes nothing
    #[serde(default)]
    pub credits: Vec<CarbonCredit>,
}

impl ReferenceDocument {
    /// Copy of the compiled-in tables
    pub fn builtin() -> Self {
        let tables = builtin();
        Self {
            version: BUILTIN_VERSION.to_string(),
            categories: tables.categories().to_vec(),
            regions: tables.regions().to_vec(),
            credits: tables.credits().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_copy_is_complete() {
        let doc = ReferenceDocument::builtin();
        assert_eq!(doc.version, BUILTIN_VERSION);
        assert_eq!(doc.categories.len(), 5);
        assert_eq!(doc.regions.len(), builtin().regions().len());
        assert_eq!(doc.credits.len(), builtin().credits().len());
    }

    #[test]
    fn credits_default_to_empty() {
        let doc: ReferenceDocument =
            serde_json::from_str(r#"{"version": "t", "categories": [], "regions": []}"#).unwrap();
        assert!(doc.credits.is_empty());
    }
}
