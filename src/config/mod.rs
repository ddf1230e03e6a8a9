// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[api]` - Classification endpoint settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NEURO_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory
//!
//! The API base URL has one extra override layer: the `NEURO_LENS_API_URL`
//! environment variable wins over whatever the config file says, and the
//! built-in default endpoint is used when neither is set.

use crate::error::{Error, Result};
use crate::ui::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config dir.
const APP_DIR_NAME: &str = "neuro_lens";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "NEURO_LENS_CONFIG_DIR";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "NEURO_LENS_API_URL";

/// Built-in classification endpoint used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://alzheimer-cnn-api.onrender.com";

/// Request timeout for the classification call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Artificial delay before dispatching the classification request, so the
/// loading indicator does not flash for near-instant responses. Presentation
/// only; correctness never depends on it.
pub const DEFAULT_MIN_LATENCY_MS: u64 = 2000;

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
        }
    }
}

/// Classification endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the inference service (the `/predict` route is appended).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,

    /// Minimum perceived latency in milliseconds before the request is sent.
    #[serde(
        default = "default_min_latency_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_latency_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: default_request_timeout_secs(),
            min_latency_ms: default_min_latency_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Classification endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Resolves the effective API base URL: environment variable first, then
    /// the config file, then the built-in default. A trailing slash is
    /// stripped so route joining stays predictable.
    pub fn resolved_base_url(&self) -> String {
        let raw = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        raw.trim_end_matches('/').to_string()
    }

    /// Effective request timeout.
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.api
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    /// Effective minimum perceived latency.
    pub fn min_latency(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.api.min_latency_ms.unwrap_or(DEFAULT_MIN_LATENCY_MS))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_min_latency_ms() -> Option<u64> {
    Some(DEFAULT_MIN_LATENCY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the application config directory, honoring the override argument
/// first and the `NEURO_LENS_CONFIG_DIR` environment variable second.
pub fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut p| {
        p.push(APP_DIR_NAME);
        p
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("Could not read settings; defaults are in effect.".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: Some("http://localhost:8000".to_string()),
                request_timeout_secs: Some(10),
                min_latency_ms: Some(0),
            },
        };

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"dark\"\n").expect("write");

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.api.base_url, None);
        assert_eq!(
            loaded.api.request_timeout_secs,
            Some(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn resolved_base_url_prefers_config_over_default() {
        let config = Config {
            api: ApiConfig {
                base_url: Some("http://localhost:9999/".to_string()),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        // Trailing slash is stripped.
        assert_eq!(config.resolved_base_url(), "http://localhost:9999");
    }

    #[test]
    fn resolved_base_url_defaults_when_unset() {
        let config = Config::default();
        assert_eq!(config.resolved_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn min_latency_uses_configured_value() {
        let config = Config {
            api: ApiConfig {
                min_latency_ms: Some(0),
                ..ApiConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.min_latency(), std::time::Duration::ZERO);
    }
}
