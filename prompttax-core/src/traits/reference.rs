//! Reference Data Provider
//!
//! Abstracts the static coefficient tables the engine consumes. The engine only
//! reads through this trait and never mutates a table.
//!
//! ## Implementations
//!
//! - `BuiltinReference`: compiled-in tables shipped with the crate
//! - `ReferenceRegistry` (prompttax-reference): tables loaded from JSON

use crate::reference::{CarbonCredit, CategoryCoefficient, RegionCoefficient};
use crate::types::Category;

/// Read-only lookup over category, region and carbon-credit tables
///
/// Region lookup is by exact code match. `regions()` must keep table order,
/// since region pickers and rankings present them in that order.
pub trait ReferenceData {
    /// Power coefficient for a category, if the table has one
    fn category(&self, category: Category) -> Option<&CategoryCoefficient>;

    /// All supported regions in table order
    fn regions(&self) -> &[RegionCoefficient];

    /// Carbon credit catalog in listing order
    fn credits(&self) -> &[CarbonCredit];

    /// Region coefficients by exact code
    fn region(&self, code: &str) -> Option<&RegionCoefficient> {
        self.regions().iter().find(|r| r.region_code == code)
    }

    /// Carbon credit by id
    fn credit(&self, id: &str) -> Option<&CarbonCredit> {
        self.credits().iter().find(|c| c.id == id)
    }
}

impl<T: ReferenceData + ?Sized> ReferenceData for &T {
    fn category(&self, category: Category) -> Option<&CategoryCoefficient> {
        (**self).category(category)
    }

    fn regions(&self) -> &[RegionCoefficient] {
        (**self).regions()
    }

    fn credits(&self) -> &[CarbonCredit] {
        (**self).credits()
    }

    fn region(&self, code: &str) -> Option<&RegionCoefficient> {
        (**self).region(code)
    }

    fn credit(&self, id: &str) -> Option<&CarbonCredit> {
        (**self).credit(id)
    }
}
