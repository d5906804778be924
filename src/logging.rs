// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup using `tracing`.
//!
//! The dialog core emits `tracing` events at every state transition; this
//! module installs the subscriber that writes them to stderr.
//!
//! Filter priority (highest first): `RUST_LOG`, the `--log-level` CLI flag
//! (applied by the caller onto [`LoggingConfig::level`]), the `[logging]`
//! config section, then [`DEFAULT_LOG_LEVEL`].

use crate::config::defaults::DEFAULT_LOG_LEVEL;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Logging(format!("unknown log format: {other}"))),
        }
    }
}

/// `[logging]` config section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive: `trace`, `debug`, `info`, `warn`, `error`, `off`,
    /// or a full `EnvFilter` expression such as `lead_dialogs=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Builds the event filter, letting `RUST_LOG` win over the config.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level)
        .map_err(|err| Error::Logging(format!("invalid log level {:?}: {err}", config.level)))
}

/// Installs the global subscriber.
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(config)?;
    let registry = Registry::default().with(filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|err| Error::Logging(err.to_string()))
}
