// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot timers for alert auto-dismissal.
//!
//! Each timed alert owns exactly one `AlertTimer`. The timer runs its action
//! on a tokio task once its deadline passes; cancelling or dropping the timer
//! aborts the task. The action itself must tolerate firing after the alert is
//! gone, since an abort cannot stop a task that has already woken up.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::Instant;

#[derive(Debug)]
pub struct AlertTimer {
    task: Option<AbortHandle>,
}

impl AlertTimer {
    /// Schedules `on_fire` to run once, `delay` after this call, on the given
    /// runtime.
    pub fn schedule<F>(runtime: &Handle, delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        // The deadline is read from the runtime's clock now, not on first poll
        let deadline = {
            let _context = runtime.enter();
            Instant::now() + delay
        };
        let task = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_fire();
        });

        Self {
            task: Some(task.abort_handle()),
        }
    }

    /// Cancels the pending action. Only the first call has an effect.
    pub fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for AlertTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    async fn settle_tasks() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let _timer = AlertTimer::schedule(&Handle::current(), Duration::from_millis(250), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::advance(Duration::from_millis(249)).await;
        settle_tasks().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle_tasks().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let mut timer = AlertTimer::schedule(&Handle::current(), Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(timer.is_cancelled());

        tokio::time::advance(Duration::from_millis(500)).await;
        settle_tasks().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_counts_from_schedule_not_first_poll() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let _timer = AlertTimer::schedule(&Handle::current(), Duration::from_millis(250), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // The task has not been polled yet when the clock moves
        tokio::time::advance(Duration::from_millis(250)).await;
        settle_tasks().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_timer_never_fires() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let timer = AlertTimer::schedule(&Handle::current(), Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        drop(timer);

        tokio::time::advance(Duration::from_millis(500)).await;
        settle_tasks().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
