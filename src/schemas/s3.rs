//! S3 bucket bindings

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::error::{LocatorError, PresignError};
use crate::s3::{build_signed_url, parse_locator, Presigner, DEFAULT_S3_EXPIRY, S3_SCHEME};
use crate::types::{AwsRegion, ClosedEnum};

/// A regional bucket family: `<base_bucket>-<region>` holding `<path>.<file_ext>` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct S3Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub base_bucket: Option<String>,
    pub region: Option<AwsRegion>,
    pub file_ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

config_object! {
    S3Config {
        optional endpoint,
        required base_bucket,
        required region,
        required file_ext,
        optional expiry,
    }
}

impl S3Config {
    /// Recover a config from `s3://<base>-<region>/<path>.<ext>`.
    ///
    /// Returns the config and the object path without its extension. A key
    /// without an extension yields an empty `file_ext`.
    pub fn from_s3_url(s3_url: &str) -> Result<(S3Config, String), LocatorError> {
        let locator = parse_locator(s3_url)?;

        let (base_bucket, region) = AwsRegion::from_bucket_suffix(locator.bucket())
            .ok_or_else(|| LocatorError::RegionNotFound(locator.bucket().to_string()))?;

        let key = locator.key();
        let file_name_start = key.rfind('/').map_or(0, |idx| idx + 1);
        let (path, file_ext) = match key[file_name_start..].rfind('.') {
            Some(dot) => {
                let dot = file_name_start + dot;
                (&key[..dot], &key[dot + 1..])
            }
            None => (key, ""),
        };

        let config = S3Config {
            endpoint: None,
            base_bucket: Some(base_bucket.to_string()),
            region: Some(region),
            file_ext: Some(file_ext.to_string()),
            expiry: None,
        };

        Ok((config, path.to_string()))
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn region(&self) -> Option<AwsRegion> {
        self.region
    }

    /// Presigned URL lifetime in seconds, 60 when unset.
    pub fn expiry(&self) -> u64 {
        self.expiry.unwrap_or(DEFAULT_S3_EXPIRY)
    }

    pub fn full_bucket_name(&self) -> String {
        format!(
            "{}-{}",
            self.base_bucket.as_deref().unwrap_or_default(),
            self.region.map(|r| r.as_str()).unwrap_or_default()
        )
    }

    pub fn full_path(&self, base_path: &str) -> String {
        format!("{}.{}", base_path, self.file_ext.as_deref().unwrap_or_default())
    }

    /// Presigned GET URL for `base_path` in this bucket.
    pub async fn signed_url(
        &self,
        presigner: &dyn Presigner,
        base_path: &str,
    ) -> Result<String, PresignError> {
        let s3_url = format!(
            "{}://{}/{}",
            S3_SCHEME,
            self.full_bucket_name(),
            self.full_path(base_path)
        );
        let region = self.region.map(|r| r.as_str()).unwrap_or_default();

        build_signed_url(presigner, &s3_url, region, self.expiry(), self.endpoint()).await
    }
}

/// Endpoint and expiry overrides for presigning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct S3EndpointExpiryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<u64>,
}

config_object! {
    S3EndpointExpiryConfig {
        optional endpoint,
        optional expiry,
    }
}

impl S3EndpointExpiryConfig {
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn expiry(&self) -> u64 {
        self.expiry.unwrap_or(DEFAULT_S3_EXPIRY)
    }
}
