//! Fetch, decode and validate configuration documents
//!
//! A load is one attempt: GET the document (presigning `s3://` URLs first),
//! decode it as JSON ignoring unknown keys, then run the validator. Nothing
//! is retried, cached or watched.

use std::io::Read;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::error::{LoadError, LocatorError, PresignError};
use crate::s3::{build_signed_url, parse_locator, Presigner, SdkPresigner, DEFAULT_S3_EXPIRY, S3_SCHEME};
use crate::types::{AwsRegion, ClosedEnum};
use crate::utils::{with_timeout, TimeoutConfig, TimeoutError};
use crate::validation::{validate, ConfigObject};

/// How `s3://` documents are presigned before they are fetched
#[derive(Clone)]
pub struct S3Access {
    presigner: Arc<dyn Presigner>,
    region: Option<AwsRegion>,
    expiry_secs: u64,
    endpoint: Option<String>,
}

impl S3Access {
    /// Region recovered from the bucket name, 60 second URLs, AWS endpoints.
    pub fn new(presigner: Arc<dyn Presigner>) -> Self {
        Self {
            presigner,
            region: None,
            expiry_secs: DEFAULT_S3_EXPIRY,
            endpoint: None,
        }
    }

    pub fn from_settings(presigner: Arc<dyn Presigner>, settings: &Settings) -> Self {
        Self {
            presigner,
            region: settings.s3_region,
            expiry_secs: settings.s3_expiry_secs,
            endpoint: settings.s3_endpoint.clone(),
        }
    }

    pub fn with_region(mut self, region: AwsRegion) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_expiry(mut self, expiry_secs: u64) -> Self {
        self.expiry_secs = expiry_secs;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    async fn presign(&self, s3_url: &str) -> Result<String, PresignError> {
        let region = match self.region {
            Some(region) => region,
            None => {
                let locator = parse_locator(s3_url)?;
                AwsRegion::from_bucket_suffix(locator.bucket())
                    .map(|(_, region)| region)
                    .ok_or_else(|| LocatorError::RegionNotFound(locator.bucket().to_string()))?
            }
        };

        build_signed_url(
            self.presigner.as_ref(),
            s3_url,
            region.as_str(),
            self.expiry_secs,
            self.endpoint.as_deref(),
        )
        .await
    }
}

/// Loads configuration documents over HTTP(S) or from S3
#[derive(Clone)]
pub struct ConfigLoader {
    client: reqwest::Client,
    timeouts: TimeoutConfig,
    s3: Option<S3Access>,
}

impl ConfigLoader {
    pub fn new(timeouts: TimeoutConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeouts.connect_timeout)
            .build()
            .map_err(LoadError::Client)?;

        Ok(Self {
            client,
            timeouts,
            s3: None,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, LoadError> {
        Self::new(settings.timeouts())
    }

    /// Enable `s3://` URLs.
    pub fn with_s3(mut self, access: S3Access) -> Self {
        self.s3 = Some(access);
        self
    }

    /// Fetch `url`, decode it into `C` and validate it.
    pub async fn load<C>(&self, url: &str) -> Result<C, LoadError>
    where
        C: DeserializeOwned + ConfigObject,
    {
        tracing::info!(url = %url, "Loading config");

        let result = self.fetch_decode_validate(url).await;
        match &result {
            Ok(_) => tracing::info!(url = %url, "Loaded config"),
            Err(err) => tracing::warn!(url = %url, error = %err, "Failed to load config"),
        }
        result
    }

    async fn fetch_decode_validate<C>(&self, url: &str) -> Result<C, LoadError>
    where
        C: DeserializeOwned + ConfigObject,
    {
        let fetch_url = self.resolve_url(url).await?;
        let body = self.fetch(&fetch_url, url).await?;
        from_json_slice(&body)
    }

    async fn resolve_url(&self, url: &str) -> Result<String, LoadError> {
        let scheme = url_scheme(url);

        match scheme.to_ascii_lowercase().as_str() {
            "http" | "https" => Ok(url.to_string()),
            S3_SCHEME => {
                let access = self.s3.as_ref().ok_or(LoadError::S3AccessMissing)?;
                Ok(access.presign(url).await?)
            }
            _ => Err(LoadError::UnsupportedScheme(scheme.to_string())),
        }
    }

    /// GET `fetch_url`; errors name `display_url` so presigned query strings
    /// never end up in error messages.
    async fn fetch(&self, fetch_url: &str, display_url: &str) -> Result<Vec<u8>, LoadError> {
        let request = async {
            let response = self
                .client
                .get(fetch_url)
                .send()
                .await
                .map_err(|source| LoadError::Request {
                    url: display_url.to_string(),
                    source,
                })?;

            let status = response.status();
            tracing::debug!(url = %display_url, status = status.as_u16(), "Config response");

            if status != reqwest::StatusCode::OK {
                return Err(LoadError::HttpStatus {
                    url: display_url.to_string(),
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                });
            }

            let body = response.bytes().await.map_err(|source| LoadError::Request {
                url: display_url.to_string(),
                source,
            })?;
            tracing::debug!(url = %display_url, bytes = body.len(), "Config body received");

            Ok::<_, LoadError>(body.to_vec())
        };

        with_timeout(self.timeouts.fetch_timeout, request)
            .await
            .map_err(|err| match err {
                TimeoutError::Timeout(timeout) => LoadError::Timeout {
                    url: display_url.to_string(),
                    timeout,
                },
                TimeoutError::Inner(err) => err,
            })
    }
}

/// Decode JSON from `reader` into `C` and validate it.
pub fn read_json_validate<C, R>(reader: R) -> Result<C, LoadError>
where
    C: DeserializeOwned + ConfigObject,
    R: Read,
{
    let config: C = serde_json::from_reader(reader)?;
    validate(&config)?;
    Ok(config)
}

/// Decode a JSON string into `C` and validate it.
pub fn from_json_str<C>(json: &str) -> Result<C, LoadError>
where
    C: DeserializeOwned + ConfigObject,
{
    from_json_slice(json.as_bytes())
}

fn from_json_slice<C>(json: &[u8]) -> Result<C, LoadError>
where
    C: DeserializeOwned + ConfigObject,
{
    let config: C = serde_json::from_slice(json)?;
    validate(&config)?;
    Ok(config)
}

fn url_scheme(url: &str) -> &str {
    url.split_once("://").map_or("", |(scheme, _)| scheme)
}

/// Whether `url` has the `s3://` scheme, in any letter case.
pub fn is_s3_url(url: &str) -> bool {
    url_scheme(url).eq_ignore_ascii_case(S3_SCHEME)
}

/// Load a document with default timeouts.
///
/// `s3://` URLs are presigned with the default AWS credential chain.
pub async fn load_config_from_url<C>(url: &str) -> Result<C, LoadError>
where
    C: DeserializeOwned + ConfigObject,
{
    let settings = Settings::default();
    let mut loader = ConfigLoader::from_settings(&settings)?;

    if is_s3_url(url) {
        let presigner: Arc<dyn Presigner> = Arc::new(SdkPresigner::from_settings(&settings).await);
        loader = loader.with_s3(S3Access::from_settings(presigner, &settings));
    }

    loader.load(url).await
}
