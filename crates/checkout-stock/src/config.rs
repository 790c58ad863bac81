//! # Stock Configuration
//!
//! Where the register finds its stock data, and how it logs.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_STOCK_FILE=/srv/prices.json                               │
//! │     CHECKOUT_LOG=debug                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config PATH, or                                                  │
//! │     ~/.config/checkout/checkout.toml (Linux)                           │
//! │     ~/Library/Application Support/com.checkout.register/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     stock_prices.json in the working directory                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [stock]
//! data_file = "/srv/checkout/stock_prices.json"
//!
//! [logging]
//! filter = "info,checkout_core=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{StockError, StockResult};

/// Environment variable overriding the stock data file.
pub const ENV_STOCK_FILE: &str = "CHECKOUT_STOCK_FILE";

/// Environment variable overriding the log filter.
pub const ENV_LOG_FILTER: &str = "CHECKOUT_LOG";

/// Stock data file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "stock_prices.json";

// =============================================================================
// Sections
// =============================================================================

/// Stock data settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSettings {
    /// Path of the JSON stock data file.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for StockSettings {
    fn default() -> Self {
        StockSettings {
            data_file: default_data_file(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive string.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete register configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockConfig {
    #[serde(default)]
    pub stock: StockSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StockConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<PathBuf>) -> StockResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(path = %path.display(), "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &std::path::Path) -> StockResult<Self> {
        info!(path = %path.display(), "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Writes the configuration as TOML.
    pub fn save(&self, path: &std::path::Path) -> StockResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!(path = %path.display(), "Config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StockResult<()> {
        if self.stock.data_file.as_os_str().is_empty() {
            return Err(StockError::InvalidConfig(
                "stock.data_file must not be empty".into(),
            ));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(StockError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from a variable source (the process environment
    /// in [`load`](Self::load)).
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = var(ENV_STOCK_FILE) {
            debug!(path = %path, "Overriding stock data file from environment");
            self.stock.data_file = PathBuf::from(path);
        }

        if let Some(filter) = var(ENV_LOG_FILTER) {
            self.logging.filter = filter;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "register")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }

    /// Returns the stock data file path.
    pub fn data_file(&self) -> &std::path::Path {
        &self.stock.data_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.data_file(), std::path::Path::new(DEFAULT_DATA_FILE));
        assert_eq!(config.logging.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: StockConfig = toml::from_str("[stock]\ndata_file = \"/srv/prices.json\"\n")
            .unwrap();
        assert_eq!(config.data_file(), std::path::Path::new("/srv/prices.json"));
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = StockConfig::default();
        config.stock.data_file = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = StockConfig::default();
        config.logging.filter = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            (ENV_STOCK_FILE, "/tmp/other.json".to_string()),
            (ENV_LOG_FILTER, "debug".to_string()),
        ]);
        let mut config = StockConfig::default();

        config.apply_overrides(|key| vars.get(key).cloned());

        assert_eq!(config.data_file(), std::path::Path::new("/tmp/other.json"));
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("checkout.toml");

        let mut config = StockConfig::default();
        config.stock.data_file = PathBuf::from("prices.json");
        config.save(&path).unwrap();

        let loaded = StockConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = StockConfig::load(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(StockError::ConfigIo(_))));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checkout.toml");
        std::fs::write(&path, "[stock\n").unwrap();

        assert!(matches!(
            StockConfig::from_file(&path),
            Err(StockError::ConfigParse(_))
        ));
    }
}
