//! Scripted probe for unit tests.

use crate::error::ProbeError;
use crate::probe::StatusProbe;
use crate::types::ProbeResult;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

pub(crate) enum Step {
    Status(&'static str),
    Fail(&'static str),
    Hang,
}

/// Plays back a fixed script of answers, then repeats `fallback` forever.
/// Every call is recorded with the resource name and the virtual time.
pub(crate) struct ScriptedProbe {
    script: Mutex<VecDeque<Step>>,
    fallback: &'static str,
    calls: Mutex<Vec<(String, Instant)>>,
}

impl ScriptedProbe {
    pub(crate) fn new(script: Vec<Step>, fallback: &'static str) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn always(status: &'static str) -> Self {
        Self::new(Vec::new(), status)
    }

    pub(crate) fn calls(&self) -> Vec<(String, Instant)> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().expect("calls lock").len()
    }
}

#[async_trait]
impl StatusProbe for ScriptedProbe {
    async fn describe_status(&self, resource_name: &str) -> Result<ProbeResult, ProbeError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((resource_name.to_string(), Instant::now()));
        let step = self.script.lock().expect("script lock").pop_front();
        match step {
            Some(Step::Status(status)) => Ok(ProbeResult::new(resource_name, status)),
            Some(Step::Fail(message)) => Err(ProbeError::new(message)),
            Some(Step::Hang) => futures::future::pending().await,
            None => Ok(ProbeResult::new(resource_name, self.fallback)),
        }
    }
}
