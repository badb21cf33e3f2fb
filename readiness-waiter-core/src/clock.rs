//! Timer abstraction used by the waiter.
//!
//! A sleep is an ordinary future: dropping it before it fires cancels the
//! timer. [`TokioClock`] is backed by `tokio::time`, so tests can run it
//! under tokio's paused virtual clock.

use futures::future::BoxFuture;
use tokio::time::Instant;

pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;

    /// Resolve once `deadline` has been reached.
    fn sleep_until(&self, deadline: Instant) -> BoxFuture<'static, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&self, deadline: Instant) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep_until(deadline))
    }
}
