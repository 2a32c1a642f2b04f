// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wellness-specific configuration for activity type mapping and
//! collaborator scheduling
//!
//! Analytic thresholds are *not* configuration; they live in
//! [`crate::constants`] so derived views stay reproducible.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main wellness configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessConfig {
    /// Mapping from external activity labels to internal type names
    pub activity_types: HashMap<String, String>,
    /// Collaborator scheduling settings
    pub refresh: RefreshConfig,
}

/// Scheduling settings for the collaborator that triggers recomputation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Minutes between periodic daily-stats refresh ticks
    pub stats_refresh_minutes: u64,
}

impl WellnessConfig {
    /// Load wellness configuration from file or use defaults
    pub fn load(path: Option<String>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_from_file(&config_path);
        }

        if Path::new("wellness_config.toml").exists() {
            return Self::load_from_file("wellness_config.toml");
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read wellness config file: {}", path))?;

        let config: WellnessConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse wellness config file: {}", path))?;

        Ok(config)
    }

    /// Get the internal type name for an external activity label
    pub fn map_activity_type(&self, label: &str) -> Option<&str> {
        self.activity_types.get(label).map(|s| s.as_str())
    }
}

impl Default for WellnessConfig {
    fn default() -> Self {
        let mut activity_types = HashMap::new();
        // Labels the dashboard and games emit, normalized to internal types
        activity_types.insert("mood".to_string(), "mood".to_string());
        activity_types.insert("game".to_string(), "game".to_string());
        activity_types.insert("anxiety_game".to_string(), "game".to_string());
        activity_types.insert("therapy".to_string(), "therapy".to_string());
        activity_types.insert("session".to_string(), "therapy".to_string());
        activity_types.insert("meditation".to_string(), "meditation".to_string());
        activity_types.insert("mindfulness".to_string(), "meditation".to_string());
        activity_types.insert("breathing".to_string(), "breathing".to_string());
        activity_types.insert("guided_breathing".to_string(), "breathing".to_string());

        Self {
            activity_types,
            refresh: RefreshConfig {
                stats_refresh_minutes: crate::constants::env_config::stats_refresh_minutes(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_has_builtin_mappings() {
        let config = WellnessConfig::default();
        assert_eq!(config.map_activity_type("anxiety_game"), Some("game"));
        assert_eq!(config.map_activity_type("session"), Some("therapy"));
        assert_eq!(config.map_activity_type("journaling"), None);
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let config = WellnessConfig::load(None).unwrap();
        assert!(!config.activity_types.is_empty());
        assert!(config.refresh.stats_refresh_minutes > 0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[activity_types]
walk = "other"
box_breathing = "breathing"

[refresh]
stats_refresh_minutes = 10
"#
        )
        .unwrap();

        let config =
            WellnessConfig::load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.map_activity_type("box_breathing"), Some("breathing"));
        assert_eq!(config.refresh.stats_refresh_minutes, 10);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = WellnessConfig::load_from_file("/nonexistent/wellness_config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = WellnessConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: WellnessConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.activity_types, config.activity_types);
    }
}
