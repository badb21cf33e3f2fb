//! Wait configuration: poll cadence, deadline, target status and the wording
//! of the timeout message.

use crate::error::RequestError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default delay between two probes.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Default hard deadline, measured from the start of the wait.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Status reported by DynamoDB once a table accepts reads and writes.
pub const DEFAULT_TARGET_STATUS: &str = "ACTIVE";

/// Noun used in the timeout message.
pub const DEFAULT_RESOURCE_KIND: &str = "resource";

/// Options for a single wait. Durations are stored in milliseconds so the
/// struct maps one-to-one onto JSON configuration and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaitOptions {
    pub poll_interval_ms: u64,
    pub timeout_ms: u64,
    pub target_status: String,
    pub resource_kind: String,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            target_status: DEFAULT_TARGET_STATUS.to_string(),
            resource_kind: DEFAULT_RESOURCE_KIND.to_string(),
        }
    }
}

impl WaitOptions {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = duration_to_millis(interval);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = duration_to_millis(timeout);
        self
    }

    pub fn with_target_status(mut self, status: impl Into<String>) -> Self {
        self.target_status = status.into();
        self
    }

    pub fn with_resource_kind(mut self, kind: impl Into<String>) -> Self {
        self.resource_kind = kind.into();
        self
    }

    /// Parse options from a JSON document; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let options: Self = serde_json::from_str(json)
            .map_err(|e| RequestError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if self.poll_interval_ms == 0 {
            return Err(RequestError::ZeroPollInterval);
        }
        if self.timeout_ms == 0 {
            return Err(RequestError::ZeroTimeout);
        }
        if self.target_status.is_empty() {
            return Err(RequestError::EmptyTargetStatus);
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Message carried by a timed-out wait, e.g.
    /// `Waiting for table status to turn ACTIVE timed out`.
    pub fn timeout_message(&self) -> String {
        format!(
            "Waiting for {} status to turn {} timed out",
            self.resource_kind, self.target_status
        )
    }
}

fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
