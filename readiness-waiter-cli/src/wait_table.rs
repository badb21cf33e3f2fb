//! `wait-table` command: wait for a DynamoDB table to reach a target status.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use log::{debug, info};
use readiness_waiter_core::{
    AwsConnection, DynamoDbTableProbe, ReadinessWaiter, WaitOptions, WaitOutcome, WaitRequest,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_TARGET_STATUS, DEFAULT_TIMEOUT_MS,
};
use tokio_util::sync::CancellationToken;

pub const EXIT_READY: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_TIMED_OUT: u8 = 3;
pub const EXIT_CANCELLED: u8 = 130;

#[derive(Args, Debug)]
pub struct WaitTableArgs {
    /// Name of the table to wait for
    pub table: String,

    /// Delay between two DescribeTable calls, in milliseconds
    #[arg(long, env = "READINESS_POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Give up after this many milliseconds
    #[arg(long, env = "READINESS_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Table status that ends the wait
    #[arg(long, env = "READINESS_TARGET_STATUS", default_value = DEFAULT_TARGET_STATUS)]
    pub target_status: String,

    /// Custom DynamoDB endpoint, e.g. http://localhost:8000 for DynamoDB Local
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// AWS region override
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Print the outcome as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl WaitTableArgs {
    fn wait_options(&self) -> WaitOptions {
        WaitOptions::default()
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_target_status(self.target_status.clone())
            .with_resource_kind("table")
    }

    fn connection(&self) -> AwsConnection {
        AwsConnection {
            endpoint_url: self.endpoint_url.clone(),
            region: self.region.clone(),
        }
    }
}

pub async fn run(args: WaitTableArgs) -> Result<ExitCode> {
    // Validate before touching AWS configuration.
    let request = WaitRequest::new(args.table.clone(), args.wait_options())
        .context("Invalid wait-table arguments")?;

    let probe = DynamoDbTableProbe::connect(&args.connection()).await;
    let waiter = ReadinessWaiter::new(probe);

    let cancel = CancellationToken::new();
    let signal_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Received Ctrl-C, cancelling wait");
            signal_token.cancel();
        }
    });

    info!(
        "Waiting up to {}ms for table '{}' to become {}",
        args.timeout_ms,
        request.resource_name(),
        request.target_status()
    );

    let Some(outcome) = waiter.wait_cancellable(&request, &cancel).await else {
        eprintln!("Wait for table '{}' cancelled", request.resource_name());
        return Ok(ExitCode::from(EXIT_CANCELLED));
    };

    report(&outcome, args.json)?;
    Ok(ExitCode::from(exit_code(&outcome)))
}

fn exit_code(outcome: &WaitOutcome) -> u8 {
    match outcome {
        WaitOutcome::Ready(_) => EXIT_READY,
        WaitOutcome::TimedOut(_) => EXIT_TIMED_OUT,
        WaitOutcome::ProbeFailed(_) => EXIT_ERROR,
    }
}

fn report(outcome: &WaitOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", outcome_json(outcome)?);
        return Ok(());
    }
    match outcome {
        WaitOutcome::Ready(_) => println!("{outcome}"),
        WaitOutcome::TimedOut(_) | WaitOutcome::ProbeFailed(_) => eprintln!("{outcome}"),
    }
    Ok(())
}

fn outcome_json(outcome: &WaitOutcome) -> Result<String> {
    let value = match outcome {
        WaitOutcome::Ready(name) => serde_json::json!({
            "outcome": outcome.kind(),
            "resourceName": name,
        }),
        WaitOutcome::TimedOut(message) => serde_json::json!({
            "outcome": outcome.kind(),
            "message": message,
        }),
        WaitOutcome::ProbeFailed(cause) => serde_json::json!({
            "outcome": outcome.kind(),
            "message": cause.to_string(),
        }),
    };
    serde_json::to_string(&value).context("Failed to serialize outcome")
}

#[cfg(test)]
mod tests {
    use super::*;
    use readiness_waiter_core::ProbeError;

    fn args(table: &str) -> WaitTableArgs {
        WaitTableArgs {
            table: table.to_string(),
            poll_interval_ms: 500,
            timeout_ms: 2000,
            target_status: "ACTIVE".to_string(),
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: Some("local-env".to_string()),
            json: false,
        }
    }

    #[test]
    fn test_wait_options_use_table_wording() {
        let options = args("table1").wait_options();
        assert_eq!(options.poll_interval_ms, 500);
        assert_eq!(options.timeout_ms, 2000);
        assert_eq!(
            options.timeout_message(),
            "Waiting for table status to turn ACTIVE timed out"
        );
    }

    #[test]
    fn test_connection_overrides() {
        let connection = args("table1").connection();
        assert_eq!(connection.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(connection.region.as_deref(), Some("local-env"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&WaitOutcome::Ready("t".into())), EXIT_READY);
        assert_eq!(exit_code(&WaitOutcome::TimedOut("late".into())), EXIT_TIMED_OUT);
        assert_eq!(
            exit_code(&WaitOutcome::ProbeFailed(ProbeError::new("boom"))),
            EXIT_ERROR
        );
    }

    #[test]
    fn test_outcome_json() {
        let json = outcome_json(&WaitOutcome::Ready("table1".into())).expect("serializable");
        assert_eq!(json, r#"{"outcome":"ready","resourceName":"table1"}"#);

        let json = outcome_json(&WaitOutcome::TimedOut(
            "Waiting for table status to turn ACTIVE timed out".into(),
        ))
        .expect("serializable");
        assert!(json.contains(r#""outcome":"timed_out""#));
        assert!(json.contains("Waiting for table status to turn ACTIVE timed out"));
    }
}
