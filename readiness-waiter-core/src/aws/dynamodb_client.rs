//! DynamoDB `DescribeTable` status probe

use crate::aws::AwsConnection;
use crate::error::ProbeError;
use crate::probe::StatusProbe;
use crate::types::ProbeResult;
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableOutput;
use aws_sdk_dynamodb::Client as DynamoDbClient;

/// Reports `Table.TableStatus` (`CREATING`, `UPDATING`, `ACTIVE`, ...) of a
/// DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoDbTableProbe {
    client: DynamoDbClient,
}

impl DynamoDbTableProbe {
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }

    /// Build a probe from the default credential provider chain plus the
    /// given connection overrides.
    pub async fn connect(connection: &AwsConnection) -> Self {
        let config = connection.load().await;
        Self::new(DynamoDbClient::new(&config))
    }
}

#[async_trait]
impl StatusProbe for DynamoDbTableProbe {
    async fn describe_status(&self, resource_name: &str) -> Result<ProbeResult, ProbeError> {
        let output = self
            .client
            .describe_table()
            .table_name(resource_name)
            .send()
            .await
            .map_err(|e| {
                let message = format!(
                    "Failed to describe table '{resource_name}': {}",
                    DisplayErrorContext(&e)
                );
                ProbeError::with_source(message, e)
            })?;

        table_status(resource_name, &output)
    }
}

/// Extract the table status from a `DescribeTable` response.
fn table_status(
    resource_name: &str,
    output: &DescribeTableOutput,
) -> Result<ProbeResult, ProbeError> {
    let table = output.table().ok_or_else(|| {
        ProbeError::new(format!(
            "DescribeTable response for '{resource_name}' has no table description"
        ))
    })?;
    let status = table.table_status().ok_or_else(|| {
        ProbeError::new(format!(
            "DescribeTable response for '{resource_name}' has no table status"
        ))
    })?;

    // The response echoes the table name; fall back to the requested one.
    let name = table.table_name().unwrap_or(resource_name);
    Ok(ProbeResult::new(name, status.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::{TableDescription, TableStatus};

    fn describe_output(status: Option<TableStatus>) -> DescribeTableOutput {
        let mut table = TableDescription::builder().table_name("table1");
        if let Some(status) = status {
            table = table.table_status(status);
        }
        DescribeTableOutput::builder().table(table.build()).build()
    }

    #[test]
    fn test_table_status_active() {
        let result = table_status("table1", &describe_output(Some(TableStatus::Active)))
            .expect("status present");
        assert_eq!(result, ProbeResult::new("table1", "ACTIVE"));
    }

    #[test]
    fn test_table_status_updating() {
        let result = table_status("table1", &describe_output(Some(TableStatus::Updating)))
            .expect("status present");
        assert_eq!(result.status, "UPDATING");
    }

    #[test]
    fn test_table_status_missing_status() {
        let err = table_status("table1", &describe_output(None)).expect_err("no status");
        assert!(err.message().contains("no table status"));
    }

    #[test]
    fn test_table_status_missing_table() {
        let output = DescribeTableOutput::builder().build();
        let err = table_status("table1", &output).expect_err("no table");
        assert!(err.message().contains("no table description"));
    }
}
