// SPDX-License-Identifier: MPL-2.0
//! `lead_dialogs` is a lead capture form built with the Iced GUI framework
//! around a reusable dialog orchestrator.
//!
//! The [`dialogs`] module holds the orchestrator: a stack of auto-dismissing
//! alerts and a strictly serialized queue of confirmations, both awaitable
//! from any call site running in its scope. [`ui`] renders them and [`app`]
//! wires everything into a window.

pub mod app;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod logging;
pub mod ui;
