//! Polling loop and deadline policy for the readiness waiter

use crate::clock::Clock;
use crate::probe::StatusProbe;
use crate::types::{WaitOutcome, WaitRequest};
use crate::waiter::classify::{classify, Classification};
use log::{debug, trace};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

impl<P: StatusProbe, C: Clock> super::service::ReadinessWaiter<P, C> {
    /// Wait until the resource reports the target status.
    ///
    /// The first probe is issued immediately. Not-ready answers schedule the
    /// next probe one poll interval after the previous one completed. A probe
    /// error ends the wait at once. The deadline is measured from this call
    /// and races both the in-flight probe and the sleep between probes, so a
    /// hanging probe cannot hold the wait past the timeout.
    pub async fn wait(&self, request: &WaitRequest) -> WaitOutcome {
        let started = self.clock.now();
        let deadline = started + request.options().timeout();
        let deadline_timer = self.clock.sleep_until(deadline);

        // Deadline first: when it coincides with a tick, the wait times out.
        let outcome = tokio::select! {
            biased;
            () = deadline_timer => WaitOutcome::TimedOut(request.options().timeout_message()),
            outcome = self.poll_until_ready(request, deadline) => outcome,
        };

        debug!(
            "Wait for '{}' finished as {} after {:?}",
            request.resource_name(),
            outcome.kind(),
            self.clock.now() - started
        );
        outcome
    }

    /// Like [`wait`](Self::wait), but returns `None` as soon as `cancel`
    /// fires. The pending timer and probe are dropped without side effects.
    pub async fn wait_cancellable(
        &self,
        request: &WaitRequest,
        cancel: &CancellationToken,
    ) -> Option<WaitOutcome> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Wait for '{}' cancelled", request.resource_name());
                None
            }
            outcome = self.wait(request) => Some(outcome),
        }
    }

    async fn poll_until_ready(&self, request: &WaitRequest, deadline: Instant) -> WaitOutcome {
        let interval = request.options().poll_interval();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            trace!(
                "Probing '{}' (attempt {attempt})",
                request.resource_name()
            );

            let result = match self.probe.describe_status(request.resource_name()).await {
                Ok(result) => result,
                Err(cause) => return WaitOutcome::ProbeFailed(cause),
            };

            match classify(request.target_status(), &result) {
                Classification::Ready => {
                    return WaitOutcome::Ready(request.resource_name().to_string())
                }
                Classification::NotReady { observed } => debug!(
                    "'{}' is {observed}, waiting for {}",
                    request.resource_name(),
                    request.target_status()
                ),
            }

            let next_tick = self.clock.now() + interval;
            if next_tick >= deadline {
                // No tick fits before the deadline; the deadline timer resolves the wait.
                return futures::future::pending().await;
            }
            self.clock.sleep_until(next_tick).await;
        }
    }
}
