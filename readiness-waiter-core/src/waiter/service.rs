//! Readiness Waiter Service Layer
//!
//! The waiter holds a status probe and a clock. Each call to `wait` is an
//! independent invocation; no state is kept between calls, so one waiter can
//! serve concurrent waits on different resources.

use crate::clock::{Clock, TokioClock};
use crate::probe::StatusProbe;

pub struct ReadinessWaiter<P, C = TokioClock> {
    pub(crate) probe: P,
    pub(crate) clock: C,
}

impl<P: StatusProbe> ReadinessWaiter<P> {
    /// Create a waiter driven by the tokio timer.
    pub fn new(probe: P) -> Self {
        Self {
            probe,
            clock: TokioClock,
        }
    }
}

impl<P: StatusProbe, C: Clock> ReadinessWaiter<P, C> {
    pub fn with_clock(probe: P, clock: C) -> Self {
        Self { probe, clock }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    // wait() and wait_cancellable() are implemented in wait.rs
}
