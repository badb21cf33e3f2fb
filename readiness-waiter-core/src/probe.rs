//! The status probe capability consumed by the waiter.

use crate::error::ProbeError;
use crate::types::ProbeResult;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// Fetches the current status of a named resource.
///
/// Implementations must resolve exactly once per call, either with the
/// observed status or with a [`ProbeError`] when the status could not be
/// determined. The waiter never retries a failed probe.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn describe_status(&self, resource_name: &str) -> Result<ProbeResult, ProbeError>;
}

#[async_trait]
impl<P> StatusProbe for Arc<P>
where
    P: StatusProbe + ?Sized,
{
    async fn describe_status(&self, resource_name: &str) -> Result<ProbeResult, ProbeError> {
        (**self).describe_status(resource_name).await
    }
}

/// Adapts a closure into a [`StatusProbe`].
///
/// ```
/// use readiness_waiter_core::{FnProbe, ProbeError, ProbeResult};
///
/// let probe = FnProbe::new(|name: String| async move {
///     Ok::<_, ProbeError>(ProbeResult::new(name, "ACTIVE"))
/// });
/// # let _ = probe;
/// ```
pub struct FnProbe<F> {
    f: F,
}

impl<F> FnProbe<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> StatusProbe for FnProbe<F>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ProbeResult, ProbeError>> + Send + 'static,
{
    async fn describe_status(&self, resource_name: &str) -> Result<ProbeResult, ProbeError> {
        (self.f)(resource_name.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fn_probe_passes_resource_name() {
        let probe = FnProbe::new(|name: String| async move {
            Ok::<_, ProbeError>(ProbeResult::new(name, "CREATING"))
        });
        let result = probe.describe_status("table1").await.expect("probe succeeds");
        assert_eq!(result, ProbeResult::new("table1", "CREATING"));
    }

    #[tokio::test]
    async fn test_shared_probe_through_arc() {
        let probe: Arc<dyn StatusProbe> = Arc::new(FnProbe::new(|_name: String| async move {
            Err::<ProbeResult, _>(ProbeError::new("ResourceNotFoundException"))
        }));
        let err = probe
            .describe_status("missing")
            .await
            .expect_err("probe fails");
        assert_eq!(err.message(), "ResourceNotFoundException");
    }
}
