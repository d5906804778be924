// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Alert**: Dismissal behavior of stacked alerts
//! - **Confirm**: Labels and backdrop behavior of confirmation dialogs
//! - **Logging**: Default log filter
//! - **Refresh**: UI refresh cadence while dialogs are active

// ==========================================================================
// Alert Defaults
// ==========================================================================

/// Alerts show a close button unless the caller opts out.
pub const DEFAULT_ALERT_DISMISSIBLE: bool = true;

/// `0` means alerts stay until closed by hand.
pub const DEFAULT_ALERT_DURATION_MS: u64 = 0;

/// Upper bound accepted from the config file for a default alert duration
/// (one hour).
pub const MAX_ALERT_DURATION_MS: u64 = 60 * 60 * 1000;

// ==========================================================================
// Confirm Defaults
// ==========================================================================

pub const DEFAULT_CONFIRM_TITLE: &str = "Confirm";

pub const DEFAULT_CONFIRM_TEXT: &str = "Confirm";

pub const DEFAULT_CANCEL_TEXT: &str = "Cancel";

/// Backdrop clicks cancel the dialog unless the caller opts out.
pub const DEFAULT_CLOSE_ON_BACKDROP: bool = true;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Refresh Defaults
// ==========================================================================

/// Tick interval used to redraw while alerts or confirmations are visible.
pub const REFRESH_INTERVAL_MS: u64 = 100;

const _: () = {
    assert!(MAX_ALERT_DURATION_MS > DEFAULT_ALERT_DURATION_MS);
    assert!(REFRESH_INTERVAL_MS > 0);
};
