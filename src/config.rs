use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::Year;

/// Session settings. Every field has a default, so a config file only names what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Location of the turnout statistics JSON array.
    pub stats_url: String,
    /// Location of the county boundary GeoJSON.
    pub counties_url: String,
    /// Quiet period before a redraw, in milliseconds.
    pub debounce_ms: u64,
    pub current_year: Year,
    pub previous_year: Year,
    pub svg_width: f64,
    pub svg_margin: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stats_url: "/tool/json/voterturnoutdata-ICPSR.json".to_string(),
            counties_url: "/tool/json/counties.geojson".to_string(),
            debounce_ms: 100,
            current_year: 2020,
            previous_year: 2016,
            svg_width: 1200.0,
            svg_margin: 10.0,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid session config")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn debounce(&self) -> Duration { Duration::from_millis(self.debounce_ms) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = SessionConfig::from_json_str(r#"{"current_year": 2012, "debounce_ms": 250}"#).unwrap();
        assert_eq!(config.current_year, 2012);
        assert_eq!(config.previous_year, 2016);
        assert_eq!(config.debounce(), Duration::from_millis(250));
        assert_eq!(config.counties_url, "/tool/json/counties.geojson");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(SessionConfig::from_json_str(r#"{"current_year": "soon"}"#).is_err());
    }

    #[test]
    fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("turnoutmap.json");
        std::fs::write(&path, r#"{"svg_width": 800}"#).unwrap();
        assert_eq!(SessionConfig::from_json_file(&path).unwrap().svg_width, 800.0);
        assert!(SessionConfig::from_json_file(&dir.path().join("none.json")).is_err());
    }
}
