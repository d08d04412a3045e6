// Configuration module.
// Loads application settings from a JSON file, with command-line overrides.

pub mod paths;
pub mod store;

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, Result};

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Development mode: verbose logging.
    pub dev_mode: bool,
    pub host: String,
    pub port: u16,
    pub slug: String,
    pub prod_host: String,
    pub download_server_url: String,
    /// Title shown on the tab strip.
    pub app_title: String,
    /// Seconds before a notification closes on its own.
    pub snack_bar_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            host: "127.0.0.1".to_string(),
            port: 8550,
            slug: String::new(),
            prod_host: String::new(),
            download_server_url: String::new(),
            app_title: "tabshell".to_string(),
            snack_bar_ttl_secs: 4,
        }
    }
}

impl AppConfig {
    /// Load settings from `path`, or the default config location when None.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default_path = paths::config_path();
        let Some(path) = path.or(default_path.as_deref()) else {
            return Ok(Self::default());
        };

        let config = match store::read_json::<AppConfig>(path)? {
            Some(config) => {
                info!(path = %path.display(), "loaded config");
                config
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Write settings to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        store::write_json(path, self)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, dev_mode: bool, host: Option<String>, port: Option<u16>) -> Self {
        self.dev_mode |= dev_mode;
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("port must be non-zero".to_string()));
        }
        if self.snack_bar_ttl_secs == 0 {
            return Err(AppError::Config(
                "snack_bar_ttl_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn snack_bar_ttl(&self) -> Duration {
        Duration::from_secs(self.snack_bar_ttl_secs)
    }

    /// Default `tracing` filter directive for this configuration.
    pub fn log_level(&self) -> &'static str {
        if self.dev_mode { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "port": 9000, "app_title": "Demo" }"#).unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.app_title, "Demo");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.snack_bar_ttl(), Duration::from_secs(4));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "port": 0 }"#).unwrap();

        assert!(matches!(
            AppConfig::load(Some(path.as_path())),
            Err(AppError::Config(_))
        ));

        let config = AppConfig {
            snack_bar_ttl_secs: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let config = AppConfig {
            dev_mode: true,
            slug: "demo".to_string(),
            ..AppConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(AppConfig::load(Some(path.as_path())).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default().with_overrides(true, Some("0.0.0.0".to_string()), None);
        assert!(config.dev_mode);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8550);
        assert_eq!(config.log_level(), "debug");

        // A false flag never clears a file setting
        let config = AppConfig {
            dev_mode: true,
            ..AppConfig::default()
        }
        .with_overrides(false, None, Some(9001));
        assert!(config.dev_mode);
        assert_eq!(config.port, 9001);
    }
}
