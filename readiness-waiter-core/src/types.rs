//! Data types shared between the waiter and its probes.

use crate::config::WaitOptions;
use crate::error::{ProbeError, RequestError, WaitError, WaitResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated request to wait for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitRequest {
    resource_name: String,
    options: WaitOptions,
}

impl WaitRequest {
    /// Validate the resource name and options. Contract violations are
    /// returned here, before any future is created.
    pub fn new(
        resource_name: impl Into<String>,
        options: WaitOptions,
    ) -> Result<Self, RequestError> {
        let resource_name = resource_name.into();
        if resource_name.trim().is_empty() {
            return Err(RequestError::EmptyResourceName);
        }
        options.validate()?;
        Ok(Self {
            resource_name,
            options,
        })
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn options(&self) -> &WaitOptions {
        &self.options
    }

    pub fn target_status(&self) -> &str {
        &self.options.target_status
    }
}

/// Raw answer of a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub resource_name: String,
    pub status: String,
}

impl ProbeResult {
    pub fn new(resource_name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            status: status.into(),
        }
    }
}

/// Terminal result of a wait.
#[derive(Debug)]
pub enum WaitOutcome {
    /// The resource reported the target status.
    Ready(String),
    /// The deadline passed first; carries the timeout message.
    TimedOut(String),
    /// The probe itself failed.
    ProbeFailed(ProbeError),
}

impl WaitOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn into_result(self) -> WaitResult<String> {
        match self {
            Self::Ready(name) => Ok(name),
            Self::TimedOut(message) => Err(WaitError::TimedOut(message)),
            Self::ProbeFailed(cause) => Err(WaitError::ProbeFailed(cause)),
        }
    }

    /// Stable lower-case label, used for logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ready(_) => "ready",
            Self::TimedOut(_) => "timed_out",
            Self::ProbeFailed(_) => "probe_failed",
        }
    }
}

impl fmt::Display for WaitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(name) => write!(f, "{name} is ready"),
            Self::TimedOut(message) => f.write_str(message),
            Self::ProbeFailed(cause) => write!(f, "Status probe failed: {cause}"),
        }
    }
}
