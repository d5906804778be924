// SPDX-License-Identifier: MPL-2.0
//! Queued, single-flight confirmation dialogs.
//!
//! Requests wait in a FIFO [`ConfirmQueue`]. The [`ConfirmMachine`] binds at
//! most one of them to the visible dialog. Each settlement immediately
//! advances the machine, so the next request opens without another call.
//!
//! ```text
//!  enqueue ──► Idle ──advance──► Open ──resolve/backdrop──► Idle ──advance──► ...
//! ```

use super::deferred::Settle;
use super::variant::Variant;
use crate::config::defaults::{
    DEFAULT_CANCEL_TEXT, DEFAULT_CLOSE_ON_BACKDROP, DEFAULT_CONFIRM_TEXT, DEFAULT_CONFIRM_TITLE,
};
use std::collections::VecDeque;

/// Caller-supplied confirmation options. Unset fields take the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOptions {
    pub title: Option<String>,
    pub message: String,
    pub variant: Option<Variant>,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub close_on_backdrop: Option<bool>,
}

impl ConfirmOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn with_confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_close_on_backdrop(mut self, close_on_backdrop: bool) -> Self {
        self.close_on_backdrop = Some(close_on_backdrop);
        self
    }
}

/// Fallback values for unset [`ConfirmOptions`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDefaults {
    pub title: String,
    pub variant: Variant,
    pub confirm_text: String,
    pub cancel_text: String,
    pub close_on_backdrop: bool,
}

impl Default for ConfirmDefaults {
    fn default() -> Self {
        Self {
            title: DEFAULT_CONFIRM_TITLE.to_string(),
            variant: Variant::default(),
            confirm_text: DEFAULT_CONFIRM_TEXT.to_string(),
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            close_on_backdrop: DEFAULT_CLOSE_ON_BACKDROP,
        }
    }
}

/// Rendering-facing projection of the confirmation dialog.
///
/// When no request is active `open` is false. The texts of the last request
/// are kept so a closing dialog does not flash default labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub variant: Variant,
    pub confirm_text: String,
    pub cancel_text: String,
    pub close_on_backdrop: bool,
}

impl ConfirmState {
    fn closed(defaults: &ConfirmDefaults) -> Self {
        Self {
            open: false,
            title: defaults.title.clone(),
            message: String::new(),
            variant: defaults.variant,
            confirm_text: defaults.confirm_text.clone(),
            cancel_text: defaults.cancel_text.clone(),
            close_on_backdrop: defaults.close_on_backdrop,
        }
    }
}

impl Default for ConfirmState {
    fn default() -> Self {
        Self::closed(&ConfirmDefaults::default())
    }
}

/// A pending or active confirmation.
#[derive(Debug)]
pub(crate) struct ConfirmRequest {
    state: ConfirmState,
    settle: Settle<bool>,
}

impl ConfirmRequest {
    pub(crate) fn new(options: ConfirmOptions, defaults: &ConfirmDefaults, settle: Settle<bool>) -> Self {
        Self {
            state: ConfirmState {
                open: true,
                title: options.title.unwrap_or_else(|| defaults.title.clone()),
                message: options.message,
                variant: options.variant.unwrap_or(defaults.variant),
                confirm_text: options
                    .confirm_text
                    .unwrap_or_else(|| defaults.confirm_text.clone()),
                cancel_text: options
                    .cancel_text
                    .unwrap_or_else(|| defaults.cancel_text.clone()),
                close_on_backdrop: options.close_on_backdrop.unwrap_or(defaults.close_on_backdrop),
            },
            settle,
        }
    }
}

/// FIFO of confirmation requests waiting for the dialog.
#[derive(Debug, Default)]
pub struct ConfirmQueue {
    pending: VecDeque<ConfirmRequest>,
}

impl ConfirmQueue {
    pub(crate) fn push(&mut self, request: ConfirmRequest) {
        self.pending.push_back(request);
    }

    pub(crate) fn pop(&mut self) -> Option<ConfirmRequest> {
        self.pending.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn drain(&mut self) -> impl Iterator<Item = ConfirmRequest> + '_ {
        self.pending.drain(..)
    }
}

/// Phase of the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPhase {
    /// No request is bound to the dialog.
    Idle,
    /// One request is bound to the visible dialog.
    Open,
}

/// Drives the single visible confirmation dialog.
#[derive(Debug, Default)]
pub struct ConfirmMachine {
    queue: ConfirmQueue,
    active: Option<ConfirmRequest>,
    state: ConfirmState,
}

impl ConfirmMachine {
    #[must_use]
    pub fn new(defaults: &ConfirmDefaults) -> Self {
        Self {
            queue: ConfirmQueue::default(),
            active: None,
            state: ConfirmState::closed(defaults),
        }
    }

    pub(crate) fn enqueue(&mut self, request: ConfirmRequest) {
        self.queue.push(request);
        self.advance();
    }

    /// Opens the head of the queue if the dialog is idle.
    ///
    /// Returns whether a request was opened. A no-op while a request is open.
    fn advance(&mut self) -> bool {
        if self.active.is_some() {
            return false;
        }
        let Some(next) = self.queue.pop() else {
            return false;
        };
        self.state = next.state.clone();
        self.active = Some(next);
        tracing::debug!(
            title = %self.state.title,
            pending = self.queue.len(),
            "confirmation opened"
        );
        true
    }

    /// Settles the active request with `value` and opens the next one.
    ///
    /// Returns `false` when no request is open.
    pub fn resolve(&mut self, value: bool) -> bool {
        let Some(mut active) = self.active.take() else {
            tracing::trace!(value, "resolve ignored, no open confirmation");
            return false;
        };
        self.state.open = false;
        active.settle.settle(value);
        tracing::debug!(value, pending = self.queue.len(), "confirmation resolved");
        self.advance();
        true
    }

    /// Handles a backdrop click or close gesture.
    ///
    /// Resolves with `false` when the open request allows it, otherwise the
    /// dialog stays open and this returns `false`.
    pub fn dismiss_backdrop(&mut self) -> bool {
        let closable = self
            .active
            .as_ref()
            .is_some_and(|active| active.state.close_on_backdrop);
        closable && self.resolve(false)
    }

    /// Settles the active and every pending request with `false`.
    pub fn clear(&mut self) -> usize {
        let mut count = 0;
        if let Some(mut active) = self.active.take() {
            active.settle.settle(false);
            count += 1;
        }
        for mut pending in self.queue.drain() {
            pending.settle.settle(false);
            count += 1;
        }
        self.state.open = false;
        count
    }

    #[must_use]
    pub fn phase(&self) -> ConfirmPhase {
        if self.active.is_some() {
            ConfirmPhase::Open
        } else {
            ConfirmPhase::Idle
        }
    }

    #[must_use]
    pub fn state(&self) -> &ConfirmState {
        &self.state
    }

    /// Number of requests waiting behind the open one.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::deferred::{deferred, Deferred};

    fn enqueue(machine: &mut ConfirmMachine, options: ConfirmOptions) -> Deferred<bool> {
        let (settle, waiter) = deferred();
        machine.enqueue(ConfirmRequest::new(options, &ConfirmDefaults::default(), settle));
        waiter
    }

    #[test]
    fn starts_idle_and_closed() {
        let machine = ConfirmMachine::new(&ConfirmDefaults::default());
        assert_eq!(machine.phase(), ConfirmPhase::Idle);
        assert!(!machine.state().open);
        assert_eq!(machine.state().title, "Confirm");
    }

    #[test]
    fn defaults_fill_unset_options() {
        let mut machine = ConfirmMachine::default();
        let _waiter = enqueue(&mut machine, ConfirmOptions::default());
        let state = machine.state();

        assert!(state.open);
        assert_eq!(state.title, "Confirm");
        assert_eq!(state.confirm_text, "Confirm");
        assert_eq!(state.cancel_text, "Cancel");
        assert!(state.close_on_backdrop);
        assert_eq!(state.variant, Variant::Alternative);
        assert!(state.message.is_empty());
    }

    #[test]
    fn second_request_waits_behind_the_first() {
        let mut machine = ConfirmMachine::default();
        let _a = enqueue(&mut machine, ConfirmOptions::default().with_title("A"));
        let _b = enqueue(&mut machine, ConfirmOptions::default().with_title("B"));

        assert_eq!(machine.phase(), ConfirmPhase::Open);
        assert_eq!(machine.state().title, "A");
        assert_eq!(machine.pending_len(), 1);
    }

    #[tokio::test]
    async fn resolving_opens_the_next_request() {
        let mut machine = ConfirmMachine::default();
        let a = enqueue(&mut machine, ConfirmOptions::default().with_title("A"));
        let b = enqueue(&mut machine, ConfirmOptions::default().with_title("B"));

        assert!(machine.resolve(false));
        assert_eq!(machine.state().title, "B");
        assert!(machine.state().open);

        assert!(machine.resolve(true));
        assert_eq!(machine.phase(), ConfirmPhase::Idle);
        assert!(!machine.state().open);

        assert_eq!(a.await, Ok(false));
        assert_eq!(b.await, Ok(true));
    }

    #[test]
    fn resolve_while_idle_does_nothing() {
        let mut machine = ConfirmMachine::default();
        assert!(!machine.resolve(true));
        assert_eq!(machine.phase(), ConfirmPhase::Idle);
    }

    #[tokio::test]
    async fn backdrop_resolves_false_when_allowed() {
        let mut machine = ConfirmMachine::default();
        let waiter = enqueue(&mut machine, ConfirmOptions::new("Leave?"));

        assert!(machine.dismiss_backdrop());
        assert_eq!(machine.phase(), ConfirmPhase::Idle);
        assert_eq!(waiter.await, Ok(false));
    }

    #[test]
    fn backdrop_is_ignored_when_disallowed() {
        let mut machine = ConfirmMachine::default();
        let _waiter = enqueue(
            &mut machine,
            ConfirmOptions::new("Really?").with_close_on_backdrop(false),
        );

        assert!(!machine.dismiss_backdrop());
        assert_eq!(machine.phase(), ConfirmPhase::Open);
        assert!(machine.state().open);
    }

    #[test]
    fn closed_state_keeps_last_texts() {
        let mut machine = ConfirmMachine::default();
        let _waiter = enqueue(
            &mut machine,
            ConfirmOptions::new("all entries will be deleted")
                .with_title("Reset the Form ?")
                .with_confirm_text("Reset"),
        );
        machine.resolve(true);

        let state = machine.state();
        assert!(!state.open);
        assert_eq!(state.title, "Reset the Form ?");
        assert_eq!(state.confirm_text, "Reset");
    }

    #[tokio::test]
    async fn clear_settles_active_and_pending_with_false() {
        let mut machine = ConfirmMachine::default();
        let a = enqueue(&mut machine, ConfirmOptions::default());
        let b = enqueue(&mut machine, ConfirmOptions::default());

        assert_eq!(machine.clear(), 2);
        assert_eq!(machine.phase(), ConfirmPhase::Idle);
        assert_eq!(machine.pending_len(), 0);
        assert_eq!(a.await, Ok(false));
        assert_eq!(b.await, Ok(false));
    }
}
