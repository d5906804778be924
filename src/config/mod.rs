// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[alert]` - Defaults for alerts raised without explicit options
//! - `[confirm]` - Default labels and backdrop behavior of confirmations
//! - `[logging]` - Log filter and output format
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use lead_dialogs::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.confirm.cancel_text = Some("Keep".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::dialogs::{AlertDefaults, ConfirmDefaults, DialogDefaults, Variant};
use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Defaults for alerts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    /// Whether alerts show a close button.
    #[serde(default = "default_dismissible", skip_serializing_if = "Option::is_none")]
    pub dismissible: Option<bool>,

    /// Auto-dismiss delay in milliseconds (`0` = never).
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            variant: Some(Variant::default()),
            dismissible: default_dismissible(),
            duration_ms: default_duration_ms(),
        }
    }
}

/// Defaults for confirmation dialogs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfirmConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<Variant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,

    /// Whether clicking the backdrop cancels the dialog.
    #[serde(
        default = "default_close_on_backdrop",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_on_backdrop: Option<bool>,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            title: Some(DEFAULT_CONFIRM_TITLE.to_string()),
            variant: Some(Variant::default()),
            confirm_text: Some(DEFAULT_CONFIRM_TEXT.to_string()),
            cancel_text: Some(DEFAULT_CANCEL_TEXT.to_string()),
            close_on_backdrop: default_close_on_backdrop(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub alert: AlertConfig,

    #[serde(default)]
    pub confirm: ConfirmConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Builds the orchestrator defaults, filling unset fields from [`defaults`].
    ///
    /// Durations above [`MAX_ALERT_DURATION_MS`] are clamped.
    #[must_use]
    pub fn dialog_defaults(&self) -> DialogDefaults {
        let fallback_confirm = ConfirmDefaults::default();
        DialogDefaults {
            alert: AlertDefaults {
                variant: self.alert.variant.unwrap_or_default(),
                dismissible: self.alert.dismissible.unwrap_or(DEFAULT_ALERT_DISMISSIBLE),
                duration_ms: self
                    .alert
                    .duration_ms
                    .unwrap_or(DEFAULT_ALERT_DURATION_MS)
                    .min(MAX_ALERT_DURATION_MS),
            },
            confirm: ConfirmDefaults {
                title: self.confirm.title.clone().unwrap_or(fallback_confirm.title),
                variant: self.confirm.variant.unwrap_or(fallback_confirm.variant),
                confirm_text: self
                    .confirm
                    .confirm_text
                    .clone()
                    .unwrap_or(fallback_confirm.confirm_text),
                cancel_text: self
                    .confirm
                    .cancel_text
                    .clone()
                    .unwrap_or(fallback_confirm.cancel_text),
                close_on_backdrop: self
                    .confirm
                    .close_on_backdrop
                    .unwrap_or(fallback_confirm.close_on_backdrop),
            },
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_dismissible() -> Option<bool> {
    Some(DEFAULT_ALERT_DISMISSIBLE)
}

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_ALERT_DURATION_MS)
}

fn default_close_on_backdrop() -> Option<bool> {
    Some(DEFAULT_CLOSE_ON_BACKDROP)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
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
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
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
    use crate::logging::LogFormat;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            alert: AlertConfig {
                variant: Some(Variant::Red),
                dismissible: Some(false),
                duration_ms: Some(4000),
            },
            confirm: ConfirmConfig {
                title: Some("Sure?".to_string()),
                variant: Some(Variant::Purple),
                confirm_text: Some("Yes".to_string()),
                cancel_text: Some("No".to_string()),
                close_on_backdrop: Some(false),
            },
            logging: LoggingConfig {
                level: "debug".to_string(),
                format: LogFormat::Json,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[alert]\nduration_ms = \"soon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[confirm]\ncancel_text = \"Keep\"\n").expect("failed to write");

        let config = load_from_path(&config_path).expect("partial config loads");
        let defaults = config.dialog_defaults();

        assert_eq!(defaults.confirm.cancel_text, "Keep");
        assert_eq!(defaults.confirm.confirm_text, DEFAULT_CONFIRM_TEXT);
        assert!(defaults.confirm.close_on_backdrop);
        assert_eq!(defaults.alert.duration_ms, DEFAULT_ALERT_DURATION_MS);
    }

    #[test]
    fn default_config_matches_dialog_defaults() {
        assert_eq!(Config::default().dialog_defaults(), DialogDefaults::default());
    }

    #[test]
    fn oversized_duration_is_clamped() {
        let mut config = Config::default();
        config.alert.duration_ms = Some(u64::MAX);
        assert_eq!(config.dialog_defaults().alert.duration_ms, MAX_ALERT_DURATION_MS);
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().join("deep")))
            .expect("save should create directories");
        assert!(temp_dir.path().join("deep").join(CONFIG_FILE).exists());
    }
}
