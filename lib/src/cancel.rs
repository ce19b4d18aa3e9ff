//! Cooperative cancellation of a turn.

use std::{
    future::{self, Future},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};
use tokio::sync::Notify;

/// A source of cancellation requests.
///
/// A turn only asks whether cancellation has been requested; no reason
/// or payload is carried.
pub trait Cancel {
    /// Whether cancellation has been requested.
    fn is_cancelled(&self) -> bool;

    /// Completes once cancellation has been requested.
    ///
    /// Completes immediately if it already has been.
    fn cancelled(&self) -> impl Future<Output = ()> + '_;
}

/// Token for cooperative cancellation.
///
/// Clones share the same state. Call [`cancel`](Self::cancel) from the
/// driver (for example on a key press), and pass the token to
/// [`TurnScheduler::advance_turn`](crate::TurnScheduler::advance_turn).
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl CancellationToken {
    /// Creates a new token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation, waking every pending turn.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    /// Clears the request so the token can be reused.
    pub fn reset(&self) {
        self.inner.cancelled.store(false, Ordering::SeqCst);
    }
}

impl Cancel for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    async fn cancelled(&self) {
        // Registered before the flag is read, so a `cancel` racing with
        // this check still wakes us.
        let notified = self.inner.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// A source that never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct Never;

impl Cancel for Never {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn cancelled(&self) -> impl Future<Output = ()> + '_ {
        future::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn token() {
        let token = CancellationToken::new();
        assert!(!token.is_cancelled());

        token.cancel();
        assert!(token.is_cancelled());

        token.reset();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let token1 = CancellationToken::new();
        let token2 = token1.clone();

        token1.cancel();
        assert!(token2.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn wakes_waiter() {
        let token = CancellationToken::new();
        let waiter = token.clone();
        let (_, ()) = tokio::join!(waiter.cancelled(), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            token.cancel();
        });
        assert!(waiter.is_cancelled());
    }

    #[tokio::test]
    async fn already_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancelled().await;
    }
}
