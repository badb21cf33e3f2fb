//! AWS SDK integration: DynamoDB-backed status probe and client loading.

pub(crate) mod dynamodb_client;

/// Connection overrides for the AWS SDK client.
///
/// Both fields fall back to the standard AWS configuration chain when unset.
/// `endpoint_url` is mostly used to point at DynamoDB Local.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AwsConnection {
    pub endpoint_url: Option<String>,
    pub region: Option<String>,
}

impl AwsConnection {
    /// Load the shared SDK configuration with the overrides applied.
    pub async fn load(&self) -> aws_config::SdkConfig {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }
        if let Some(region) = &self.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        loader.load().await
    }
}
