// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Rendering follows the Elm-style "state down, messages up" pattern: views
//! read orchestrator projections and emit messages that the application turns
//! back into orchestrator actions.
//!
//! - [`toast`] - Alert stack overlay
//! - [`confirm_modal`] - Modal layer for the open confirmation
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod confirm_modal;
pub mod design_tokens;
pub mod styles;
pub mod toast;
