// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Dialog requests themselves never fail: malformed options fall back to
//! defaults. The variants here cover wiring defects (using the dialog facade
//! without a live orchestrator) and the configuration/logging plumbing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `dialogs::current()` was called outside `Orchestrator::scope`/`enter`.
    #[error("dialog facade used outside of an orchestrator scope")]
    OutsideOrchestrator,

    /// The orchestrator owning a `Dialogs` handle has been dropped.
    #[error("the orchestrator behind this dialog handle is gone")]
    OrchestratorClosed,

    /// An orchestrator scope was entered while another one was active.
    #[error("an orchestrator scope is already active for this task")]
    NestedOrchestrator,

    /// No tokio runtime was available to drive alert timers.
    #[error("no tokio runtime available for alert timers")]
    NoRuntime,

    /// A deferred result's settle side was dropped without settling it.
    #[error("deferred result was abandoned before being settled")]
    Abandoned,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl Error {
    /// Returns whether this error is a wiring defect at a call site rather
    /// than an environmental failure.
    #[must_use]
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Error::OutsideOrchestrator
                | Error::OrchestratorClosed
                | Error::NestedOrchestrator
                | Error::NoRuntime
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
