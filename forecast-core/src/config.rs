use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::ForecastQuery;

/// Default location set interactively with `forecast configure`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub label: String,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// forecast_days = 5
/// timezone = "America/New_York"
///
/// [location]
/// latitude = 40.7128
/// longitude = -74.006
/// label = "New York, NY"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub location: Option<LocationConfig>,
    pub forecast_days: u8,
    pub timezone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: None,
            forecast_days: 5,
            timezone: "America/New_York".to_string(),
        }
    }
}

impl Config {
    /// Builds the provider query, falling back to the built-in location when
    /// none is configured. `forecast_days` is clamped to Open-Meteo's 1-16
    /// range.
    pub fn query(&self) -> ForecastQuery {
        let mut query = ForecastQuery::default();

        if let Some(location) = &self.location {
            query.latitude = location.latitude;
            query.longitude = location.longitude;
            query.location_label = location.label.clone();
        }

        query.timezone = self.timezone.clone();
        query.days = self.forecast_days.clamp(1, 16);
        query
    }

    /// Load config from disk, or return the default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-widget", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_targets_new_york() {
        let query = Config::default().query();

        assert_eq!(query.location_label, "New York, NY");
        assert_eq!(query.timezone, "America/New_York");
        assert_eq!(query.days, 5);
    }

    #[test]
    fn configured_location_overrides_the_default() {
        let cfg = Config {
            location: Some(LocationConfig {
                latitude: 51.5072,
                longitude: -0.1276,
                label: "London, UK".to_string(),
            }),
            timezone: "Europe/London".to_string(),
            ..Config::default()
        };

        let query = cfg.query();
        assert_eq!(query.location_label, "London, UK");
        assert_eq!(query.timezone, "Europe/London");
        assert!((query.latitude - 51.5072).abs() < f64::EPSILON);
    }

    #[test]
    fn forecast_days_are_clamped() {
        let mut cfg = Config::default();

        cfg.forecast_days = 0;
        assert_eq!(cfg.query().days, 1);

        cfg.forecast_days = 40;
        assert_eq!(cfg.query().days, 16);
    }

    #[test]
    fn empty_file_parses_to_defaults() {
        let cfg: Config = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config {
            location: Some(LocationConfig {
                latitude: 40.7128,
                longitude: -74.0060,
                label: "New York, NY".to_string(),
            }),
            forecast_days: 7,
            timezone: "America/New_York".to_string(),
        };

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&text).expect("parse back");
        assert_eq!(parsed, cfg);
    }
}
