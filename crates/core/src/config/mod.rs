//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (TAGBOT_*)
//! 2. TOML config file (if TAGBOT_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (TAGBOT_*)
/// 2. TOML config file (if TAGBOT_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP request timeout in milliseconds.
    ///
    /// Set via TAGBOT_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum bytes to fetch per page.
    ///
    /// Set via TAGBOT_MAX_BYTES environment variable.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Maximum number of redirects to follow.
    ///
    /// Set via TAGBOT_MAX_REDIRECTS environment variable.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_max_bytes() -> usize {
    5_242_880 // 5MB
}

fn default_max_redirects() -> usize {
    10
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_bytes: default_max_bytes(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration file cannot be read,
    /// environment variables cannot be parsed, or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("TAGBOT_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("TAGBOT_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.max_bytes, 5_242_880);
        assert_eq!(config.max_redirects, 10);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_from_env() {
        Jail::expect_with(|jail| {
            jail.set_env("TAGBOT_TIMEOUT_MS", "2500");
            jail.set_env("TAGBOT_MAX_REDIRECTS", "3");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.timeout_ms, 2500);
            assert_eq!(config.max_redirects, 3);
            assert_eq!(config.max_bytes, 5_242_880);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("tagbot.toml", "timeout_ms = 1000\nmax_bytes = 1024\n")?;
            jail.set_env("TAGBOT_CONFIG_FILE", "tagbot.toml");
            jail.set_env("TAGBOT_TIMEOUT_MS", "750");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.timeout_ms, 750);
            assert_eq!(config.max_bytes, 1024);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.set_env("TAGBOT_TIMEOUT_MS", "10");

            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
            Ok(())
        });
    }
}
