//! TUI configuration persistence
//!
//! Saves and loads terminal settings: which server to talk to, which site
//! this terminal clocks against, and report preferences.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use punchcard_core::Coordinates;

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "punchcard";

fn default_server_url() -> String {
    "http://localhost:3000".to_string()
}

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Base URL of the Punchcard server
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Site this terminal clocks against
    #[serde(default)]
    pub site_id: Option<String>,

    /// Fixed terminal position reported with clock events
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    /// Export format for pay reports
    #[serde(default)]
    pub report_format: ReportFormatConfig,
}

/// Report export format preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatConfig {
    #[default]
    Csv,
    Json,
}

impl ReportFormatConfig {
    /// Cycle to the next format (settings toggle)
    pub fn toggled(&self) -> Self {
        match self {
            ReportFormatConfig::Csv => ReportFormatConfig::Json,
            ReportFormatConfig::Json => ReportFormatConfig::Csv,
        }
    }

    /// Label shown in the settings screen
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormatConfig::Csv => "CSV",
            ReportFormatConfig::Json => "JSON",
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            site_id: None,
            coordinates: None,
            report_format: ReportFormatConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        let path = match Self::config_file_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        let config_file = config_dir.join(CONFIG_FILE_NAME);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(&config_file, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", config_file);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.server_url, "http://localhost:3000");
        assert!(config.site_id.is_none());
        assert!(config.coordinates.is_none());
        assert_eq!(config.report_format, ReportFormatConfig::Csv);
    }

    #[test]
    fn test_config_serialization() {
        let config = TuiConfig {
            server_url: "https://clock.example.com".to_string(),
            site_id: Some("site-9".to_string()),
            coordinates: Some(Coordinates {
                latitude: 40.4168,
                longitude: -3.7038,
            }),
            report_format: ReportFormatConfig::Json,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.server_url, "https://clock.example.com");
        assert_eq!(parsed.site_id, Some("site-9".to_string()));
        assert_eq!(parsed.report_format, ReportFormatConfig::Json);
    }

    #[test]
    fn test_config_tolerates_missing_fields() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.server_url, "http://localhost:3000");
        assert!(parsed.site_id.is_none());
    }

    #[test]
    fn test_report_format_toggle() {
        assert_eq!(
            ReportFormatConfig::Csv.toggled(),
            ReportFormatConfig::Json
        );
        assert_eq!(
            ReportFormatConfig::Json.toggled(),
            ReportFormatConfig::Csv
        );
    }
}
