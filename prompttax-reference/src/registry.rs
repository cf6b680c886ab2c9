//! Reference Registry
//!
//! A validated [`ReferenceDocument`] served through the engine's
//! [`ReferenceData`] trait. Construction is the only place validation happens,
//! so a registry that exists is always safe to calculate against.

use std::fs;
use std::path::Path;

use prompttax_core::{CarbonCredit, Category, CategoryCoefficient, ReferenceData, RegionCoefficient};

use crate::document::ReferenceDocument;
use crate::validation::validate;
use crate::{ReferenceError, ReferenceResult};

/// Validated reference tables
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceRegistry {
    document: ReferenceDocument,
}

impl ReferenceRegistry {
    /// Validate and wrap a document
    pub fn from_document(document: ReferenceDocument) -> ReferenceResult<Self> {
        validate(&document)?;
        Ok(Self { document })
    }

    /// Parse and validate a JSON reference document
    pub fn from_json_str(json: &str) -> ReferenceResult<Self> {
        let document: ReferenceDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Load a JSON reference document from disk
    pub fn from_path(path: impl AsRef<Path>) -> ReferenceResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ReferenceError::io(path, e))?;
        let registry = Self::from_json_str(&json)?;

        log::info!(
            "loaded reference tables v{} from {} ({} regions, {} credits)",
            registry.version(),
            path.display(),
            registry.document.regions.len(),
            registry.document.credits.len()
        );

        Ok(registry)
    }

    /// Registry over the compiled-in tables
    pub fn defaults() -> Self {
        Self {
            document: ReferenceDocument::builtin(),
        }
    }

    /// Content version of the loaded tables
    pub fn version(&self) -> &str {
        &self.document.version
    }

    pub fn document(&self) -> &ReferenceDocument {
        &self.document
    }

    /// Pretty-printed JSON for the loaded tables
    pub fn to_json_string(&self) -> ReferenceResult<String> {
        Ok(serde_json::to_string_pretty(&self.document)?)
    }
}

impl Default for ReferenceRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ReferenceData for ReferenceRegistry {
    fn category(&self, category: Category) -> Option<&CategoryCoefficient> {
        self.document.categories.iter().find(|c| c.category == category)
    }

    fn regions(&self) -> &[RegionCoefficient] {
        &self.document.regions
    }

    fn credits(&self) -> &[CarbonCredit] {
        &self.document.credits
    }
}
