//! Presigned S3 GET URLs
//!
//! The builder parses the locator, validates the region and hands everything
//! to a [`Presigner`]. It keeps no state between calls.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::{Credentials, SharedCredentialsProvider};
use aws_sdk_s3::presigning::PresigningConfig;

use super::locator::{parse_locator, S3Locator};
use crate::config::aws::s3_config;
use crate::config::{AwsConfigBuilder, Settings};
use crate::error::{PresignError, SigningError};
use crate::types::AwsRegion;

/// Default presigned URL lifetime in seconds.
pub const DEFAULT_S3_EXPIRY: u64 = 60;

/// Default endpoint: none, use the regional AWS endpoint.
pub const DEFAULT_S3_ENDPOINT: &str = "";

/// Everything a signer needs to produce one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignRequest {
    pub region: AwsRegion,
    pub bucket: String,
    pub key: String,
    pub expiry_secs: u64,
    /// Custom endpoint, never empty when set.
    pub endpoint: Option<String>,
    /// Address the bucket in the path instead of the host name. Set exactly
    /// when a custom endpoint is used.
    pub force_path_style: bool,
}

impl PresignRequest {
    pub fn new(
        region: AwsRegion,
        locator: S3Locator,
        expiry_secs: u64,
        endpoint: Option<&str>,
    ) -> Self {
        let endpoint = endpoint
            .filter(|endpoint| !endpoint.is_empty())
            .map(str::to_string);

        Self {
            region,
            bucket: locator.bucket().to_string(),
            key: locator.key().to_string(),
            expiry_secs,
            force_path_style: endpoint.is_some(),
            endpoint,
        }
    }
}

/// Request signing capability
#[async_trait]
pub trait Presigner: Send + Sync {
    /// Produce a time-limited GET URL for the object.
    async fn presign_get(&self, request: &PresignRequest) -> Result<String, SigningError>;
}

/// Build a presigned GET URL for `s3_url`.
///
/// Locator, region and signing errors are returned as-is; nothing is retried.
pub async fn build_signed_url(
    presigner: &dyn Presigner,
    s3_url: &str,
    region: &str,
    expiry_secs: u64,
    endpoint: Option<&str>,
) -> Result<String, PresignError> {
    let locator = parse_locator(s3_url)?;
    let region: AwsRegion = region.parse()?;

    let request = PresignRequest::new(region, locator, expiry_secs, endpoint);

    tracing::debug!(
        bucket = %request.bucket,
        key = %request.key,
        region = %request.region,
        expiry_secs = request.expiry_secs,
        path_style = request.force_path_style,
        "Presigning S3 GET"
    );

    Ok(presigner.presign_get(&request).await?)
}

/// [`Presigner`] backed by the AWS SDK's SigV4 presigning
#[derive(Debug, Clone)]
pub struct SdkPresigner {
    sdk_config: SdkConfig,
}

impl SdkPresigner {
    pub fn new(sdk_config: SdkConfig) -> Self {
        Self { sdk_config }
    }

    /// Use the default credential chain (environment, profile, instance role)
    /// with the base SDK config built from settings.
    pub async fn from_settings(settings: &Settings) -> Self {
        Self::new(AwsConfigBuilder::new(settings).build_sdk_config().await)
    }

    /// Use fixed credentials; signing then needs no network access.
    pub fn with_credentials(credentials: Credentials) -> Self {
        let sdk_config = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .credentials_provider(SharedCredentialsProvider::new(credentials))
            .build();
        Self::new(sdk_config)
    }
}

#[async_trait]
impl Presigner for SdkPresigner {
    async fn presign_get(&self, request: &PresignRequest) -> Result<String, SigningError> {
        let config = s3_config(
            &self.sdk_config,
            request.region,
            request.endpoint.as_deref(),
            request.force_path_style,
        );
        let client = aws_sdk_s3::Client::from_conf(config);

        let presigning = PresigningConfig::expires_in(Duration::from_secs(request.expiry_secs))
            .map_err(SigningError::new)?;

        let presigned = client
            .get_object()
            .bucket(&request.bucket)
            .key(&request.key)
            .presigned(presigning)
            .await
            .map_err(SigningError::new)?;

        Ok(presigned.uri().to_string())
    }
}
