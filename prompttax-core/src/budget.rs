//! User settings and impact budgets
//!
//! Budgets are expressed per day. Results for longer periods are normalized by
//! the period multiplier before comparison.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calculator::ImpactResult;
use crate::types::{Category, UsageEntry};

/// Region used when settings do not name one
pub const DEFAULT_REGION: &str = "US";

/// Per-user preferences that feed engine calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub region: String,
    pub budget_co2_grams_per_day: Option<f64>,
    pub screen_time_cap_minutes: Option<HashMap<Category, f64>>,
    pub notifications_enabled: bool,
    pub reduction_target_pct: Option<f64>,
    pub reduction_target_days: Option<u32>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            budget_co2_grams_per_day: None,
            screen_time_cap_minutes: None,
            notifications_enabled: true,
            reduction_target_pct: None,
            reduction_target_days: None,
        }
    }
}

/// Daily CO₂ use against the configured budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub budget_grams: f64,
    /// Result CO₂ normalized to one day
    pub used_grams: f64,
    pub used_pct: f64,
    pub exceeded: bool,
}

/// Compare a result with the daily CO₂ budget, if one is set
pub fn budget_status(result: &ImpactResult, settings: &UserSettings) -> Option<BudgetStatus> {
    let budget = settings.budget_co2_grams_per_day?;
    let used = result.co2_grams / result.period.multiplier();

    // A zero budget is fully used only once something is emitted
    let used_pct = if budget > 0.0 {
        used / budget * 100.0
    } else if used > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    Some(BudgetStatus {
        budget_grams: budget,
        used_grams: used,
        used_pct,
        exceeded: used > budget,
    })
}

/// A category used for longer than its cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapViolation {
    pub category: Category,
    pub minutes_per_day: f64,
    pub cap_minutes: f64,
}

/// Entries exceeding their screen-time cap, in entry order
pub fn cap_violations(entries: &[UsageEntry], settings: &UserSettings) -> Vec<CapViolation> {
    let Some(caps) = &settings.screen_time_cap_minutes else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let cap = *caps.get(&entry.category)?;
            (entry.minutes_per_day > cap).then_some(CapViolation {
                category: entry.category,
                minutes_per_day: entry.minutes_per_day,
                cap_minutes: cap,
            })
        })
        .collect()
}

/// Daily CO₂ target implied by the reduction goal
pub fn reduction_goal_grams(baseline_daily_co2: f64, settings: &UserSettings) -> Option<f64> {
    settings
        .reduction_target_pct
        .map(|pct| baseline_daily_co2 * (1.0 - pct / 100.0))
}
