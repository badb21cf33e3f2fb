//! Classification of a single probe answer

use crate::types::ProbeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification<'a> {
    Ready,
    NotReady { observed: &'a str },
}

/// Compare the observed status with the target. The comparison is exact and
/// case-sensitive; statuses are otherwise opaque.
pub fn classify<'a>(target_status: &str, result: &'a ProbeResult) -> Classification<'a> {
    if result.status == target_status {
        Classification::Ready
    } else {
        Classification::NotReady {
            observed: &result.status,
        }
    }
}
