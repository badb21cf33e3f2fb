//! Error types for the readiness waiter.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Caller-contract violations, reported before any probe is issued.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Resource name must not be empty")]
    EmptyResourceName,

    #[error("Poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Target status must not be empty")]
    EmptyTargetStatus,

    #[error("Invalid wait options: {0}")]
    InvalidOptions(String),
}

/// Failure reported by a [`StatusProbe`](crate::StatusProbe) when the status
/// could not be determined (transport or control-plane error).
#[derive(Debug)]
pub struct ProbeError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl ProbeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ProbeError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

/// Terminal failures of a wait, for callers that prefer `?` over matching on
/// [`WaitOutcome`](crate::WaitOutcome).
#[derive(Debug, Error)]
pub enum WaitError {
    #[error("{0}")]
    TimedOut(String),

    #[error("Status probe failed: {0}")]
    ProbeFailed(#[source] ProbeError),
}

pub type WaitResult<T> = Result<T, WaitError>;
