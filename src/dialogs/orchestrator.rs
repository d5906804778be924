// SPDX-License-Identifier: MPL-2.0
//! The dialog orchestrator and its call-site facade.
//!
//! [`Orchestrator`] owns the alert stack and the confirmation machine. The
//! rendering layer talks to it directly: it reads projections and invokes the
//! sanctioned actions (dismiss/acknowledge an alert, resolve the open
//! confirmation). Everyone else gets a [`Dialogs`] handle, which can only
//! raise alerts and request confirmations.
//!
//! Call sites that are not handed a `Dialogs` explicitly look it up with
//! [`current`], which only succeeds inside [`Orchestrator::scope`] or
//! [`Orchestrator::enter`].

use super::alert::{AlertDefaults, AlertId, AlertOptions, AlertRequest, AlertStack, AlertView};
use super::confirm::{ConfirmDefaults, ConfirmMachine, ConfirmOptions, ConfirmPhase, ConfirmRequest, ConfirmState};
use super::deferred::{deferred, Deferred};
use super::timer::AlertTimer;
use crate::error::{Error, Result};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;

tokio::task_local! {
    static CURRENT: Dialogs;
}

/// Defaults applied to unset alert and confirmation options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogDefaults {
    pub alert: AlertDefaults,
    pub confirm: ConfirmDefaults,
}

#[derive(Debug)]
struct Shared {
    alerts: AlertStack,
    confirms: ConfirmMachine,
    defaults: DialogDefaults,
    revision: watch::Sender<u64>,
}

impl Shared {
    fn touch(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }

    fn expire_alert(&mut self, id: AlertId) {
        if self.alerts.expire(id) {
            self.touch();
        }
    }
}

/// Every mutation goes through this lock; it is never held across an await.
fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owner of all dialog state.
#[derive(Debug)]
pub struct Orchestrator {
    shared: Arc<Mutex<Shared>>,
    runtime: Handle,
    revision: watch::Receiver<u64>,
}

impl Orchestrator {
    /// Creates an orchestrator whose alert timers run on `runtime`.
    #[must_use]
    pub fn new(defaults: DialogDefaults, runtime: Handle) -> Self {
        let (revision_tx, revision_rx) = watch::channel(0);
        let shared = Shared {
            alerts: AlertStack::new(),
            confirms: ConfirmMachine::new(&defaults.confirm),
            defaults,
            revision: revision_tx,
        };
        Self {
            shared: Arc::new(Mutex::new(shared)),
            runtime,
            revision: revision_rx,
        }
    }

    /// Creates an orchestrator bound to the tokio runtime of the caller.
    pub fn with_current_runtime(defaults: DialogDefaults) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|_| {
            tracing::error!("orchestrator created outside a tokio runtime");
            Error::NoRuntime
        })?;
        Ok(Self::new(defaults, runtime))
    }

    /// Returns a call-site handle. It stops working once `self` is dropped.
    #[must_use]
    pub fn dialogs(&self) -> Dialogs {
        Dialogs {
            shared: Arc::downgrade(&self.shared),
            runtime: self.runtime.clone(),
        }
    }

    /// Runs `future` with this orchestrator reachable through [`current`].
    ///
    /// Fails with [`Error::NestedOrchestrator`] if the future is already
    /// running inside another scope.
    pub fn scope<F>(&self, future: F) -> impl Future<Output = Result<F::Output>>
    where
        F: Future,
    {
        let dialogs = self.dialogs();
        async move {
            if CURRENT.try_with(|_| ()).is_ok() {
                tracing::error!("nested orchestrator scope refused");
                return Err(Error::NestedOrchestrator);
            }
            Ok(CURRENT.scope(dialogs, future).await)
        }
    }

    /// Synchronous counterpart of [`Orchestrator::scope`], for event handlers.
    pub fn enter<R>(&self, f: impl FnOnce() -> R) -> Result<R> {
        if CURRENT.try_with(|_| ()).is_ok() {
            tracing::error!("nested orchestrator scope refused");
            return Err(Error::NestedOrchestrator);
        }
        Ok(CURRENT.sync_scope(self.dialogs(), f))
    }

    // ------------------------------------------------------------------
    // Projections
    // ------------------------------------------------------------------

    /// Visible alerts in stacking order.
    #[must_use]
    pub fn alerts(&self) -> Vec<AlertView> {
        lock(&self.shared).alerts.views()
    }

    #[must_use]
    pub fn confirm_state(&self) -> ConfirmState {
        lock(&self.shared).confirms.state().clone()
    }

    #[must_use]
    pub fn confirm_phase(&self) -> ConfirmPhase {
        lock(&self.shared).confirms.phase()
    }

    /// Confirmations waiting behind the open one.
    #[must_use]
    pub fn pending_confirms(&self) -> usize {
        lock(&self.shared).confirms.pending_len()
    }

    /// Whether anything is on screen or waiting to be.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        let shared = lock(&self.shared);
        !shared.alerts.is_empty() || shared.confirms.phase() == ConfirmPhase::Open
    }

    /// Monotonic counter bumped on every visible change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Receiver notified on every visible change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.clone()
    }

    // ------------------------------------------------------------------
    // Rendering-layer actions
    // ------------------------------------------------------------------

    /// Close button of a dismissible alert.
    pub fn dismiss_alert(&self, id: AlertId) -> bool {
        let mut shared = lock(&self.shared);
        let closed = shared.alerts.dismiss(id);
        if closed {
            shared.touch();
        }
        closed
    }

    /// Explicit acknowledgement ("OK") of an alert.
    pub fn acknowledge_alert(&self, id: AlertId) -> bool {
        let mut shared = lock(&self.shared);
        let closed = shared.alerts.acknowledge(id);
        if closed {
            shared.touch();
        }
        closed
    }

    /// Confirm (`true`) or cancel (`false`) button of the open dialog.
    pub fn resolve_confirm(&self, value: bool) -> bool {
        let mut shared = lock(&self.shared);
        let resolved = shared.confirms.resolve(value);
        if resolved {
            shared.touch();
        }
        resolved
    }

    /// Backdrop click or close gesture on the open dialog.
    pub fn dismiss_confirm_backdrop(&self) -> bool {
        let mut shared = lock(&self.shared);
        let resolved = shared.confirms.dismiss_backdrop();
        if resolved {
            shared.touch();
        }
        resolved
    }

    /// Settles everything outstanding: alerts with `()`, confirmations with
    /// `false`. Returns how many requests were settled.
    pub fn shutdown(&self) -> usize {
        let mut shared = lock(&self.shared);
        let settled = shared.alerts.clear() + shared.confirms.clear();
        if settled > 0 {
            shared.touch();
        }
        tracing::info!(settled, "dialog orchestrator shut down");
        settled
    }
}

/// Call-site facade: raise alerts and request confirmations.
#[derive(Debug, Clone)]
pub struct Dialogs {
    shared: Weak<Mutex<Shared>>,
    runtime: Handle,
}

impl Dialogs {
    fn upgrade(&self) -> Result<Arc<Mutex<Shared>>> {
        self.shared.upgrade().ok_or_else(|| {
            tracing::error!("dialog requested after its orchestrator was dropped");
            Error::OrchestratorClosed
        })
    }

    /// Shows an alert on top of the stack.
    ///
    /// The result settles once the alert closes, whichever way it closes.
    pub fn alert(&self, options: AlertOptions) -> Result<Deferred<()>> {
        let shared = self.upgrade()?;
        let (settle, waiter) = deferred();
        let id = AlertId::next();

        let mut guard = lock(&shared);
        let mut request = AlertRequest::new(id, options, &guard.defaults.alert, settle);
        let duration = request.duration();
        if !duration.is_zero() {
            let weak = Weak::clone(&self.shared);
            request.arm(AlertTimer::schedule(&self.runtime, duration, move || {
                if let Some(shared) = weak.upgrade() {
                    lock(&shared).expire_alert(id);
                }
            }));
        }
        guard.alerts.push(request);
        guard.touch();
        tracing::debug!(%id, duration_ms = duration.as_millis() as u64, visible = guard.alerts.len(), "alert shown");

        Ok(waiter)
    }

    /// Queues a confirmation. Resolves `true` if confirmed, `false` otherwise.
    pub fn confirm(&self, options: ConfirmOptions) -> Result<Deferred<bool>> {
        let shared = self.upgrade()?;
        let (settle, waiter) = deferred();

        let mut guard = lock(&shared);
        let request = ConfirmRequest::new(options, &guard.defaults.confirm, settle);
        guard.confirms.enqueue(request);
        guard.touch();
        tracing::debug!(pending = guard.confirms.pending_len(), "confirmation queued");

        Ok(waiter)
    }
}

/// Looks up the dialog facade of the enclosing orchestrator scope.
///
/// Fails with [`Error::OutsideOrchestrator`] outside any scope; this is a
/// wiring defect and callers should surface it rather than swallow it.
pub fn current() -> Result<Dialogs> {
    CURRENT.try_with(Dialogs::clone).map_err(|_| {
        tracing::error!("dialog facade used outside an orchestrator scope");
        Error::OutsideOrchestrator
    })
}
