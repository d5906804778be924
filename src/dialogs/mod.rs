// SPDX-License-Identifier: MPL-2.0
//! Alert and confirmation orchestration.
//!
//! Any part of the application can ask for the user's attention without
//! coordinating with other callers:
//!
//! - [`Dialogs::alert`] pushes a transient alert onto a stack. Alerts are
//!   visible together, each with its own optional auto-dismiss timer.
//! - [`Dialogs::confirm`] queues a blocking yes/no question. Confirmations are
//!   shown strictly one at a time, in the order they were requested.
//!
//! Both return a [`Deferred`] that settles when the user (or a timer) closes
//! the request.
//!
//! # Components
//!
//! - [`deferred`] - One-shot settle/await pair
//! - [`timer`] - Cancellable auto-dismiss timer owned by each timed alert
//! - [`alert`] - Alert options, projections and the visible stack
//! - [`confirm`] - Confirmation options, FIFO queue and state machine
//! - [`orchestrator`] - Owner of all state, call-site facade and scoped lookup
//!
//! # Usage
//!
//! ```no_run
//! use lead_dialogs::dialogs::{self, AlertOptions, ConfirmOptions, DialogDefaults, Orchestrator, Variant};
//!
//! # async fn demo() -> lead_dialogs::error::Result<()> {
//! let orchestrator = Orchestrator::with_current_runtime(DialogDefaults::default())?;
//!
//! orchestrator
//!     .scope(async {
//!         let dialogs = dialogs::current()?;
//!         let _shown = dialogs.alert(
//!             AlertOptions::new("Lead submitted successfully.")
//!                 .with_title("Success")
//!                 .with_variant(Variant::Green)
//!                 .with_duration_ms(2000),
//!         )?;
//!
//!         let reset = dialogs
//!             .confirm(ConfirmOptions::new("all entries will be deleted").with_confirm_text("Reset"))?
//!             .await?;
//!         Ok::<bool, lead_dialogs::error::Error>(reset)
//!     })
//!     .await??;
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod confirm;
pub mod deferred;
pub mod orchestrator;
pub mod timer;
mod variant;

pub use alert::{AlertDefaults, AlertId, AlertOptions, AlertStack, AlertView, CloseReason};
pub use confirm::{ConfirmDefaults, ConfirmMachine, ConfirmOptions, ConfirmPhase, ConfirmQueue, ConfirmState};
pub use deferred::{Deferred, Settle};
pub use orchestrator::{current, DialogDefaults, Dialogs, Orchestrator};
pub use variant::Variant;
