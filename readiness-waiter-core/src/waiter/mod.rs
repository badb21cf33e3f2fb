//! Waiter module - deadline-bounded polling of a [`StatusProbe`](crate::StatusProbe)

mod classify;
pub(crate) mod service;
mod wait;

pub use classify::{classify, Classification};
pub use service::ReadinessWaiter;
