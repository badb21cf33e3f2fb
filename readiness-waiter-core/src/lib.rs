//! This crate provides the core logic of the readiness waiter:
//! - Deadline-bounded polling of a resource status until it reaches a target value
//! - The `StatusProbe` capability and adapters for closures and shared probes
//! - A DynamoDB `DescribeTable` probe built on the AWS SDK
//!

mod aws;
mod clock;
mod config;
mod error;
mod probe;
mod types;
mod waiter;

#[cfg(test)]
mod test_utils;

// Re-exports for a small, focused public API
pub use aws::dynamodb_client::DynamoDbTableProbe;
pub use aws::AwsConnection;
pub use clock::{Clock, TokioClock};
pub use config::{
    WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_RESOURCE_KIND, DEFAULT_TARGET_STATUS,
    DEFAULT_TIMEOUT_MS,
};
pub use error::{ProbeError, RequestError, WaitError, WaitResult};
pub use probe::{FnProbe, StatusProbe};
pub use types::{ProbeResult, WaitOutcome, WaitRequest};
pub use waiter::{classify, Classification, ReadinessWaiter};
