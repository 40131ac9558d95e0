//! `s3://bucket/key` locators

use std::fmt;
use std::str::FromStr;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::LocatorError;

/// The only accepted locator scheme.
pub const S3_SCHEME: &str = "s3";

/// Bucket and key parsed from an `s3://` URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct S3Locator {
    bucket: String,
    key: String,
}

impl S3Locator {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Object key: the URL path without its leading slash.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for S3Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", S3_SCHEME, self.bucket, self.key)
    }
}

impl FromStr for S3Locator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_locator(s)
    }
}

/// Parse an `s3://bucket/key` URL. Pure string parsing, no network access.
pub fn parse_locator(s3_url: &str) -> Result<S3Locator, LocatorError> {
    let url = Url::parse(s3_url)?;
    if url.scheme() != S3_SCHEME {
        return Err(LocatorError::InvalidScheme(url.scheme().to_string()));
    }

    let bucket = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or(LocatorError::MissingBucket)?;

    let path = percent_decode_str(url.path())
        .decode_utf8()
        .map_err(|_| LocatorError::InvalidKey(url.path().to_string()))?;
    let key = path.strip_prefix('/').unwrap_or(&*path);

    Ok(S3Locator::new(bucket, key))
}
