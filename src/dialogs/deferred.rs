// SPDX-License-Identifier: MPL-2.0
//! One-shot deferred results.
//!
//! A request record holds the [`Settle`] side; the caller awaits the
//! [`Deferred`] side. Settling consumes the inner sender, so a second
//! settlement is a no-op instead of a runtime error.

use crate::error::{Error, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// Creates a connected settle/await pair.
pub fn deferred<T>() -> (Settle<T>, Deferred<T>) {
    let (sender, receiver) = oneshot::channel();
    (
        Settle {
            sender: Some(sender),
        },
        Deferred { receiver },
    )
}

/// Writable side of a deferred result.
#[derive(Debug)]
pub struct Settle<T> {
    sender: Option<oneshot::Sender<T>>,
}

impl<T> Settle<T> {
    /// Supplies the outcome.
    ///
    /// Returns `true` the first time and `false` on every later call. A caller
    /// that stopped waiting still counts as settled.
    pub fn settle(&mut self, value: T) -> bool {
        match self.sender.take() {
            Some(sender) => {
                let _ = sender.send(value);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.sender.is_none()
    }
}

/// Awaitable side of a deferred result.
///
/// Resolves to `Err(Error::Abandoned)` if the settle side is dropped unsettled.
#[derive(Debug)]
#[must_use = "a deferred result does nothing unless awaited"]
pub struct Deferred<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for Deferred<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|outcome| outcome.map_err(|_| Error::Abandoned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn settled_value_reaches_the_awaiting_side() {
        let (mut settle, waiter) = deferred::<bool>();
        assert!(settle.settle(true));
        assert_eq!(waiter.await, Ok(true));
    }

    #[tokio::test]
    async fn second_settlement_is_ignored() {
        let (mut settle, waiter) = deferred::<u8>();
        assert!(settle.settle(1));
        assert!(!settle.settle(2));
        assert!(settle.is_settled());
        assert_eq!(waiter.await, Ok(1));
    }

    #[tokio::test]
    async fn dropping_settle_side_abandons_the_result() {
        let (settle, waiter) = deferred::<()>();
        drop(settle);
        assert_eq!(waiter.await, Err(Error::Abandoned));
    }

    #[test]
    fn settling_after_waiter_dropped_still_counts() {
        let (mut settle, waiter) = deferred::<()>();
        drop(waiter);
        assert!(settle.settle(()));
        assert!(!settle.settle(()));
    }
}
