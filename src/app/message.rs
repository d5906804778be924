// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::{form, showcase};
use crate::dialogs::DialogDefaults;
use crate::error::Error;
use crate::ui::{confirm_modal, toast};
use std::time::Instant;
use tokio::runtime::Handle;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Showcase(showcase::Message),
    Toast(toast::Message),
    Confirm(confirm_modal::Message),
    /// Answer to the reset confirmation.
    ResetAnswered(Result<bool, Error>),
    /// Answer to one confirmation of a showcase burst (1-based step).
    BurstAnswered {
        step: usize,
        answer: Result<bool, Error>,
    },
    /// A showcase alert closed.
    AlertClosed(Result<(), Error>),
    Tick(Instant), // Periodic tick while dialogs are on screen
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Defaults resolved from the config file.
    pub defaults: DialogDefaults,
    /// Runtime driving alert timers.
    pub runtime: Handle,
    /// Warning produced while loading the config, shown as an alert.
    pub config_warning: Option<String>,
}
