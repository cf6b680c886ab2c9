//! Application configuration file
//!
//! ```json
//! {
//!   "region": "GB",
//!   "default_period": "monthly",
//!   "settings": { "budget_co2_grams_per_day": 50 },
//!   "reference_path": "tables/2024.json"
//! }
//! ```
//!
//! Only `region` is required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use prompttax_core::budget::UserSettings;
use prompttax_core::{Period, ReferenceData};

use crate::registry::ReferenceRegistry;
use crate::{ReferenceError, ReferenceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub region: String,
    #[serde(default)]
    pub default_period: Period,
    #[serde(default)]
    pub settings: UserSettings,
    /// Reference document to load instead of the built-in tables
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            default_period: Period::default(),
            settings: UserSettings::default(),
            reference_path: None,
        }
    }

    pub fn from_json_str(json: &str) -> ReferenceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ReferenceResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ReferenceError::io(path, e))?;
        let config = Self::from_json_str(&json)?;

        log::info!(
            "loaded config from {} (region {}, period {})",
            path.display(),
            config.region,
            config.default_period
        );

        Ok(config)
    }

    /// Reference tables for this configuration.
    ///
    /// Loads `reference_path` when set, otherwise the built-in tables, and
    /// fails if the configured region is not among them.
    pub fn registry(&self) -> ReferenceResult<ReferenceRegistry> {
        let registry = match &self.reference_path {
            Some(path) => ReferenceRegistry::from_path(path)?,
            None => ReferenceRegistry::defaults(),
        };

        if registry.region(&self.region).is_none() {
            return Err(ReferenceError::UnknownRegion(self.region.clone()));
        }

        Ok(registry)
    }

    /// User settings with the configured region applied
    pub fn user_settings(&self) -> UserSettings {
        UserSettings {
            region: self.region.clone(),
            ..self.settings.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = AppConfig::from_json_str(r#"{"region": "FR"}"#).unwrap();
        assert_eq!(config, AppConfig::new("FR"));
        assert_eq!(config.default_period, Period::Daily);
        assert!(config.settings.notifications_enabled);
    }

    #[test]
    fn region_is_required() {
        assert!(AppConfig::from_json_str(r#"{"default_period": "weekly"}"#).is_err());
    }

    #[test]
    fn unknown_period_name_rejected() {
        let err = AppConfig::from_json_str(r#"{"region": "US", "default_period": "hourly"}"#)
            .unwrap_err();
        assert!(matches!(err, ReferenceError::Json(_)));
    }

    #[test]
    fn builtin_registry_for_known_region() {
        let registry = AppConfig::new("SE").registry().unwrap();
        assert_eq!(registry.version(), "builtin");
    }

    #[test]
    fn unknown_region_rejected() {
        let err = AppConfig::new("ATLANTIS").registry().unwrap_err();
        assert!(matches!(err, ReferenceError::UnknownRegion(code) if code == "ATLANTIS"));
    }

    #[test]
    fn settings_follow_config_region() {
        let config = AppConfig::from_json_str(
            r#"{"region": "DE", "settings": {"region": "US", "reduction_target_pct": 20}}"#,
        )
        .unwrap();

        let settings = config.user_settings();
        assert_eq!(settings.region, "DE");
        assert_eq!(settings.reduction_target_pct, Some(20.0));
    }
}
