// SPDX-License-Identifier: MPL-2.0
//! Stacked, independently timed alerts.
//!
//! Alerts are appended to the end of the visible stack and stay there until
//! one of three paths closes them: manual dismissal (dismissible alerts only),
//! explicit acknowledgement, or timer expiry. Whichever path comes first
//! removes the record, cancels its timer and settles its deferred result; the
//! other paths then find nothing to act on.

use super::deferred::Settle;
use super::timer::AlertTimer;
use super::variant::Variant;
use crate::config::defaults::{DEFAULT_ALERT_DISMISSIBLE, DEFAULT_ALERT_DURATION_MS};
use std::fmt;
use std::time::Duration;

/// Unique identifier for an alert. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    pub(crate) fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alert-{}", self.0)
    }
}

/// Caller-supplied alert options. Unset fields take the orchestrator defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertOptions {
    pub title: Option<String>,
    pub message: String,
    pub variant: Option<Variant>,
    pub dismissible: Option<bool>,
    /// `0` never auto-dismisses.
    pub duration_ms: Option<u64>,
}

impl AlertOptions {
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
    pub fn with_dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = Some(dismissible);
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Fallback values for unset [`AlertOptions`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertDefaults {
    pub variant: Variant,
    pub dismissible: bool,
    pub duration_ms: u64,
}

impl Default for AlertDefaults {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            dismissible: DEFAULT_ALERT_DISMISSIBLE,
            duration_ms: DEFAULT_ALERT_DURATION_MS,
        }
    }
}

/// Rendering-facing projection of a visible alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub id: AlertId,
    pub title: Option<String>,
    pub message: String,
    pub variant: Variant,
    pub dismissible: bool,
}

/// A live alert record. Owns its settle side and its timer.
#[derive(Debug)]
pub(crate) struct AlertRequest {
    view: AlertView,
    duration: Duration,
    settle: Settle<()>,
    timer: Option<AlertTimer>,
}

impl AlertRequest {
    pub(crate) fn new(
        id: AlertId,
        options: AlertOptions,
        defaults: &AlertDefaults,
        settle: Settle<()>,
    ) -> Self {
        let duration_ms = options.duration_ms.unwrap_or(defaults.duration_ms);
        Self {
            view: AlertView {
                id,
                title: options.title,
                message: options.message,
                variant: options.variant.unwrap_or(defaults.variant),
                dismissible: options.dismissible.unwrap_or(defaults.dismissible),
            },
            duration: Duration::from_millis(duration_ms),
            settle,
            timer: None,
        }
    }

    pub(crate) fn id(&self) -> AlertId {
        self.view.id
    }

    /// Auto-dismiss delay; zero means the alert stays until closed by hand.
    pub(crate) fn duration(&self) -> Duration {
        self.duration
    }

    pub(crate) fn arm(&mut self, timer: AlertTimer) {
        self.timer = Some(timer);
    }

    fn close(mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.settle.settle(());
    }
}

/// Why an alert left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Dismissed,
    Acknowledged,
    Expired,
}

/// Ordered collection of currently visible alerts.
#[derive(Debug, Default)]
pub struct AlertStack {
    visible: Vec<AlertRequest>,
}

impl AlertStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, request: AlertRequest) {
        self.visible.push(request);
    }

    /// Closes a dismissible alert through its close affordance.
    ///
    /// Non-dismissible alerts have no close affordance, so this returns
    /// `false` for them and leaves them visible.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        let dismissible = self
            .visible
            .iter()
            .find(|request| request.id() == id)
            .is_some_and(|request| request.view.dismissible);
        dismissible && self.close(id, CloseReason::Dismissed)
    }

    /// Closes an alert through its explicit acknowledgement action.
    pub fn acknowledge(&mut self, id: AlertId) -> bool {
        self.close(id, CloseReason::Acknowledged)
    }

    /// Closes an alert whose timer fired. A stale timer finds nothing.
    pub fn expire(&mut self, id: AlertId) -> bool {
        self.close(id, CloseReason::Expired)
    }

    fn close(&mut self, id: AlertId, reason: CloseReason) -> bool {
        let Some(pos) = self.visible.iter().position(|request| request.id() == id) else {
            tracing::trace!(%id, ?reason, "alert already closed");
            return false;
        };
        let request = self.visible.remove(pos);
        request.close();
        tracing::debug!(%id, ?reason, remaining = self.visible.len(), "alert closed");
        true
    }

    /// Closes every alert, settling each one. Returns how many were closed.
    pub fn clear(&mut self) -> usize {
        let count = self.visible.len();
        for request in self.visible.drain(..) {
            request.close();
        }
        count
    }

    /// Projections of the visible alerts, in stacking order (oldest first).
    #[must_use]
    pub fn views(&self) -> Vec<AlertView> {
        self.visible.iter().map(|request| request.view.clone()).collect()
    }

    #[must_use]
    pub fn contains(&self, id: AlertId) -> bool {
        self.visible.iter().any(|request| request.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogs::deferred::{deferred, Deferred};

    fn request(options: AlertOptions) -> (AlertRequest, Deferred<()>) {
        let (settle, waiter) = deferred();
        let request = AlertRequest::new(AlertId::next(), options, &AlertDefaults::default(), settle);
        (request, waiter)
    }

    #[test]
    fn alert_ids_are_unique() {
        assert_ne!(AlertId::next(), AlertId::next());
    }

    #[test]
    fn unset_options_take_defaults() {
        let (request, _waiter) = request(AlertOptions::new("saved"));
        assert_eq!(request.view.variant, Variant::Alternative);
        assert!(request.view.dismissible);
        assert!(request.duration().is_zero());
        assert!(request.view.title.is_none());
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = AlertOptions::new("nope")
            .with_title("Missing Required Fields")
            .with_variant(Variant::Red)
            .with_dismissible(false)
            .with_duration_ms(3000);
        let (request, _waiter) = request(options);

        assert_eq!(request.view.title.as_deref(), Some("Missing Required Fields"));
        assert_eq!(request.view.variant, Variant::Red);
        assert!(!request.view.dismissible);
        assert_eq!(request.duration(), Duration::from_millis(3000));
    }

    #[test]
    fn push_appends_in_creation_order() {
        let mut stack = AlertStack::new();
        let (first, _a) = request(AlertOptions::new("first"));
        let (second, _b) = request(AlertOptions::new("second"));
        stack.push(first);
        stack.push(second);

        let messages: Vec<String> = stack.views().into_iter().map(|view| view.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn dismiss_removes_and_settles() {
        let mut stack = AlertStack::new();
        let (req, waiter) = request(AlertOptions::new("bye"));
        let id = req.id();
        stack.push(req);

        assert!(stack.dismiss(id));
        assert!(stack.is_empty());
        assert_eq!(waiter.await, Ok(()));
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let mut stack = AlertStack::new();
        let (req, _waiter) = request(AlertOptions::new("once"));
        let id = req.id();
        stack.push(req);

        assert!(stack.dismiss(id));
        assert!(!stack.dismiss(id));
        assert!(!stack.expire(id));
        assert!(!stack.acknowledge(id));
    }

    #[test]
    fn non_dismissible_alert_ignores_dismiss() {
        let mut stack = AlertStack::new();
        let (req, _waiter) = request(AlertOptions::new("read me").with_dismissible(false));
        let id = req.id();
        stack.push(req);

        assert!(!stack.dismiss(id));
        assert!(stack.contains(id));

        assert!(stack.acknowledge(id));
        assert!(!stack.contains(id));
    }

    #[test]
    fn closing_one_alert_leaves_the_others() {
        let mut stack = AlertStack::new();
        let (a, _wa) = request(AlertOptions::new("a"));
        let (b, _wb) = request(AlertOptions::new("b"));
        let (c, _wc) = request(AlertOptions::new("c"));
        let b_id = b.id();
        stack.push(a);
        stack.push(b);
        stack.push(c);

        assert!(stack.expire(b_id));
        let messages: Vec<String> = stack.views().into_iter().map(|view| view.message).collect();
        assert_eq!(messages, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn clear_settles_everything() {
        let mut stack = AlertStack::new();
        let (a, wa) = request(AlertOptions::new("a"));
        let (b, wb) = request(AlertOptions::new("b").with_dismissible(false));
        stack.push(a);
        stack.push(b);

        assert_eq!(stack.clear(), 2);
        assert!(stack.is_empty());
        assert_eq!(wa.await, Ok(()));
        assert_eq!(wb.await, Ok(()));
    }
}
