//! Application configuration
//!
//! TOML configuration stored under the platform config directory
//! (`<config_dir>/planrs/config.toml`). Missing files yield the defaults;
//! saving stamps the metadata timestamps.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::LogConfig;

/// Configuration format version
pub const CONFIG_VERSION: &str = "1.0";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration metadata
    pub metadata: ConfigMetadata,

    /// General application settings
    pub settings: AppSettings,

    /// Logging configuration
    pub logging: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Session length assumed when none is given (minutes)
    pub default_duration: u32,

    /// Offer the optimal warm-up/cool-down split when building durations
    pub auto_suggest_structure: bool,

    /// Attach the JSON source backup to flattened records on export
    pub include_source_backup: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_duration: 45,
            auto_suggest_structure: true,
            include_source_backup: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            metadata: ConfigMetadata {
                version: CONFIG_VERSION.to_string(),
                created_at: now,
                updated_at: now,
            },
            settings: AppSettings::default(),
            logging: LogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default configuration file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine the platform configuration directory")?;
        Ok(config_dir.join("planrs").join("config.toml"))
    }

    /// Load configuration from a file, falling back to defaults when missing
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self> {
        Self::load(Self::default_path()?)
    }

    /// Save configuration to a file, updating the modification timestamp
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        self.metadata.updated_at = Utc::now();
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Look up a settings value by dotted key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "settings.default_duration" => Some(self.settings.default_duration.to_string()),
            "settings.auto_suggest_structure" => {
                Some(self.settings.auto_suggest_structure.to_string())
            }
            "settings.include_source_backup" => {
                Some(self.settings.include_source_backup.to_string())
            }
            "logging.level" => Some(self.logging.level.to_filter()),
            _ => None,
        }
    }

    /// Set a settings value by dotted key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "settings.default_duration" => {
                self.settings.default_duration = value
                    .parse()
                    .with_context(|| format!("Invalid duration: {}", value))?;
            }
            "settings.auto_suggest_structure" => {
                self.settings.auto_suggest_structure = value
                    .parse()
                    .with_context(|| format!("Invalid boolean: {}", value))?;
            }
            "settings.include_source_backup" => {
                self.settings.include_source_backup = value
                    .parse()
                    .with_context(|| format!("Invalid boolean: {}", value))?;
            }
            "logging.level" => {
                self.logging.level = value
                    .parse()
                    .map_err(|e: String| anyhow::anyhow!(e))?;
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.settings.default_duration, 45);
        assert!(config.settings.auto_suggest_structure);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("planrs").join("config.toml");

        let mut config = AppConfig::default();
        config.settings.default_duration = 60;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.settings.default_duration, 60);
        assert_eq!(loaded.metadata.version, CONFIG_VERSION);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut config = AppConfig::default();
        config.set("settings.default_duration", "30").unwrap();
        assert_eq!(
            config.get("settings.default_duration").as_deref(),
            Some("30")
        );

        config.set("logging.level", "debug").unwrap();
        assert_eq!(config.get("logging.level").as_deref(), Some("debug"));

        assert!(config.set("settings.unknown", "x").is_err());
        assert!(config.set("settings.default_duration", "abc").is_err());
        assert_eq!(config.get("nope"), None);
    }
}
