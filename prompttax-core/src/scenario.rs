//! What-if scenarios
//!
//! Re-runs the calculator on a profile with per-category percentage changes and
//! reports the CO₂ difference against the unchanged profile. An adjustment of
//! -100 removes a category's usage entirely; +100 doubles it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calculator::{Calculator, ImpactResult};
use crate::errors::EngineResult;
use crate::traits::ReferenceData;
use crate::types::{Category, Period, UsageEntry};

/// Bounds of a single category adjustment, in percent
pub const ADJUSTMENT_RANGE_PCT: (f64, f64) = (-100.0, 100.0);

/// Percentage change per category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Adjustments {
    pct: HashMap<Category, f64>,
}

impl Adjustments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the change for `category`, clamped to ±100%
    pub fn set(&mut self, category: Category, pct: f64) -> &mut Self {
        let (min, max) = ADJUSTMENT_RANGE_PCT;
        self.pct.insert(category, pct.clamp(min, max));
        self
    }

    pub fn with(mut self, category: Category, pct: f64) -> Self {
        self.set(category, pct);
        self
    }

    /// Change for `category`, zero when unset
    pub fn get(&self, category: Category) -> f64 {
        self.pct.get(&category).copied().unwrap_or(0.0)
    }

    pub fn clear(&mut self) {
        self.pct.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pct.is_empty()
    }
}

/// Apply adjustments to a profile, keeping entry order.
///
/// Minutes never go below zero.
pub fn apply(base: &[UsageEntry], adjustments: &Adjustments) -> Vec<UsageEntry> {
    base.iter()
        .map(|entry| UsageEntry {
            category: entry.category,
            minutes_per_day: (entry.minutes_per_day * (1.0 + adjustments.get(entry.category) / 100.0))
                .max(0.0),
        })
        .collect()
}

/// Baseline and adjusted results with the CO₂ difference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub baseline: ImpactResult,
    pub simulated: ImpactResult,
    /// simulated − baseline
    pub co2_delta_grams: f64,
    /// Delta as a percentage of the baseline, 0 when the baseline is 0
    pub co2_delta_pct: f64,
}

impl ScenarioOutcome {
    pub fn is_reduction(&self) -> bool {
        self.co2_delta_grams < 0.0
    }
}

/// Compare `base` against `base` with `adjustments` applied
pub fn simulate<R: ReferenceData + ?Sized>(
    calculator: &Calculator<'_, R>,
    base: &[UsageEntry],
    adjustments: &Adjustments,
    region_code: &str,
    period: Period,
) -> EngineResult<ScenarioOutcome> {
    let baseline = calculator.calculate(base, region_code, period)?;
    let simulated = calculator.calculate(&apply(base, adjustments), region_code, period)?;

    let co2_delta_grams = simulated.co2_grams - baseline.co2_grams;
    let co2_delta_pct = if baseline.co2_grams > 0.0 {
        co2_delta_grams / baseline.co2_grams * 100.0
    } else {
        0.0
    };

    Ok(ScenarioOutcome {
        baseline,
        simulated,
        co2_delta_grams,
        co2_delta_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::builtin;
    use crate::types::demo_profile;

    #[test]
    fn adjustments_are_clamped() {
        let adj = Adjustments::new()
            .with(Category::Chatbots, -250.0)
            .with(Category::AiSearch, 400.0);
        assert_eq!(adj.get(Category::Chatbots), -100.0);
        assert_eq!(adj.get(Category::AiSearch), 100.0);
        assert_eq!(adj.get(Category::AiWriting), 0.0);
    }

    #[test]
    fn apply_scales_only_adjusted_categories() {
        let adj = Adjustments::new()
            .with(Category::Chatbots, -50.0)
            .with(Category::AiVideoGen, 100.0);
        let adjusted = apply(&demo_profile(), &adj);

        assert_eq!(adjusted[0].minutes_per_day, 22.5);
        assert_eq!(adjusted[1].minutes_per_day, 20.0);
        assert_eq!(adjusted[3].minutes_per_day, 10.0);
        assert_eq!(adjusted.len(), 5);
    }

    #[test]
    fn removing_all_usage_is_full_reduction() {
        let mut adj = Adjustments::new();
        for category in Category::ALL {
            adj.set(category, -100.0);
        }

        let calc = Calculator::new(builtin());
        let outcome = simulate(&calc, &demo_profile(), &adj, "US", Period::Monthly).unwrap();

        assert_eq!(outcome.simulated.co2_grams, 0.0);
        assert!(outcome.is_reduction());
        assert!((outcome.co2_delta_pct + 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_baseline_reports_zero_pct() {
        let calc = Calculator::new(builtin());
        let adj = Adjustments::new().with(Category::Chatbots, 50.0);
        let outcome = simulate(&calc, &[], &adj, "SE", Period::Daily).unwrap();
        assert_eq!(outcome.co2_delta_grams, 0.0);
        assert_eq!(outcome.co2_delta_pct, 0.0);
    }

    #[test]
    fn unknown_region_propagates() {
        let calc = Calculator::new(builtin());
        let result = simulate(&calc, &demo_profile(), &Adjustments::new(), "ZZ", Period::Daily);
        assert!(result.is_err());
    }
}
