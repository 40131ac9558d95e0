//! AWS SDK configuration
//!
//! This module builds AWS SDK configuration for the S3 presigner and for
//! DynamoDB clients described by validated configuration documents,
//! supporting custom endpoints for local development and testing.

use aws_config::{meta::region::RegionProviderChain, BehaviorVersion, Region, SdkConfig};
use aws_sdk_dynamodb::Client as DynamoDbSdkClient;

use crate::config::Settings;
use crate::schemas::DynamoDbClientConfig;
use crate::types::{AwsRegion, ClosedEnum};

/// Region used when neither settings nor the environment provide one
const FALLBACK_REGION: &str = "us-east-1";

/// AWS configuration builder
///
/// Creates AWS SDK configuration with support for:
/// - The region from settings, then the default region chain
/// - Credential providers (environment, profile, instance role, etc.)
/// - Custom endpoint URLs for local testing
pub struct AwsConfigBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> AwsConfigBuilder<'a> {
    /// Create a new AWS configuration builder
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build the base AWS SDK configuration
    ///
    /// Service specific builders start from this and override region and
    /// endpoint as needed.
    pub async fn build_sdk_config(&self) -> SdkConfig {
        let region_provider =
            RegionProviderChain::first_try(self.settings.s3_region.map(|r| Region::new(r.as_str())))
                .or_default_provider()
                .or_else(FALLBACK_REGION);

        aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await
    }

    /// Create a DynamoDB client for a validated client config
    ///
    /// When the config carries an endpoint the client uses it (DynamoDB
    /// Local or LocalStack), with `disable_ssl` choosing the scheme.
    pub async fn build_dynamodb_client(&self, client: &DynamoDbClientConfig) -> DynamoDbSdkClient {
        let sdk_config = self.build_sdk_config().await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(region) = client.region() {
            builder = builder.region(Region::new(region.as_str()));
        }
        if let Some(endpoint_url) = client.endpoint_url() {
            tracing::info!(endpoint = %endpoint_url, "Using custom DynamoDB endpoint");
            builder = builder.endpoint_url(endpoint_url);
        }

        DynamoDbSdkClient::from_conf(builder.build())
    }
}

/// S3 client config for one presign request
///
/// A custom endpoint is normally paired with path-style addressing, since
/// local S3 stand-ins do not resolve bucket subdomains.
pub fn s3_config(
    sdk_config: &SdkConfig,
    region: AwsRegion,
    endpoint: Option<&str>,
    force_path_style: bool,
) -> aws_sdk_s3::Config {
    let mut builder = aws_sdk_s3::config::Builder::from(sdk_config)
        .region(Region::new(region.as_str()))
        .force_path_style(force_path_style);

    if let Some(endpoint) = endpoint {
        builder = builder.endpoint_url(endpoint);
    }

    builder.build()
}

/// Build AWS SDK config from settings (convenience function)
pub async fn build_aws_config(settings: &Settings) -> SdkConfig {
    AwsConfigBuilder::new(settings).build_sdk_config().await
}

/// Create a DynamoDB client from settings and a client config (convenience function)
pub async fn create_dynamodb_client(
    settings: &Settings,
    client: &DynamoDbClientConfig,
) -> DynamoDbSdkClient {
    AwsConfigBuilder::new(settings).build_dynamodb_client(client).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            s3_region: Some(AwsRegion::UsWest2),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_build_sdk_config() {
        let config = build_aws_config(&settings()).await;

        // Region from settings wins over the environment
        assert_eq!(config.region().unwrap().as_ref(), "us-west-2");
    }

    #[tokio::test]
    async fn test_dynamodb_client_region() {
        let client_config = DynamoDbClientConfig {
            region: Some(AwsRegion::EuWest1),
            endpoint: None,
            disable_ssl: None,
        };
        let client = create_dynamodb_client(&settings(), &client_config).await;
        assert_eq!(client.config().region().unwrap().as_ref(), "eu-west-1");
    }

    #[tokio::test]
    async fn test_custom_endpoint_dynamodb() {
        let client_config = DynamoDbClientConfig {
            region: Some(AwsRegion::UsEast1),
            endpoint: Some("localhost:8001".to_string()),
            disable_ssl: Some(true),
        };
        let client = create_dynamodb_client(&settings(), &client_config).await;
        assert_eq!(client.config().region().unwrap().as_ref(), "us-east-1");
    }

    #[test]
    fn test_s3_config_region() {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .build();
        let config = s3_config(&sdk_config, AwsRegion::ApNortheast1, None, false);
        assert_eq!(config.region().unwrap().as_ref(), "ap-northeast-1");

        let config = s3_config(
            &sdk_config,
            AwsRegion::UsEast1,
            Some("http://localhost:8500"),
            true,
        );
        assert_eq!(config.region().unwrap().as_ref(), "us-east-1");
    }
}
