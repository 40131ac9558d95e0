//! Process settings
//!
//! This module loads the CLI and loader settings from environment variables
//! (and a `.env` file when present) with sensible defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::s3::DEFAULT_S3_EXPIRY;
use crate::types::AwsRegion;
use crate::utils::TimeoutConfig;

/// Main application settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub log_level: String,

    // Fetch settings
    pub fetch_timeout_secs: u64,
    pub connect_timeout_secs: u64,

    // S3 settings
    /// Region used to presign `s3://` config URLs. When unset the region is
    /// recovered from the bucket name.
    pub s3_region: Option<AwsRegion>,
    pub s3_endpoint: Option<String>,
    pub s3_expiry_secs: u64,
}

impl Settings {
    /// Load settings from environment variables with defaults
    pub fn load() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let settings = Self {
            log_level: or_default("LOG_LEVEL", "info"),

            fetch_timeout_secs: or_default("REMOTECONFIG_FETCH_TIMEOUT_SECS", "30")
                .parse()
                .context("Invalid REMOTECONFIG_FETCH_TIMEOUT_SECS value")?,
            connect_timeout_secs: or_default("REMOTECONFIG_CONNECT_TIMEOUT_SECS", "10")
                .parse()
                .context("Invalid REMOTECONFIG_CONNECT_TIMEOUT_SECS value")?,

            s3_region: non_empty("REMOTECONFIG_S3_REGION")
                .map(|region| region.parse::<AwsRegion>())
                .transpose()
                .context("Invalid REMOTECONFIG_S3_REGION value")?,
            s3_endpoint: non_empty("REMOTECONFIG_S3_ENDPOINT"),
            s3_expiry_secs: or_default("REMOTECONFIG_S3_EXPIRY_SECS", &DEFAULT_S3_EXPIRY.to_string())
                .parse()
                .context("Invalid REMOTECONFIG_S3_EXPIRY_SECS value")?,
        };

        // Validate settings
        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout_secs == 0 {
            anyhow::bail!("Fetch timeout must be > 0");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("Connect timeout must be > 0");
        }
        if self.s3_expiry_secs == 0 {
            anyhow::bail!("S3 presign expiry must be > 0");
        }

        if self.s3_endpoint.is_some() && self.s3_region.is_none() {
            tracing::warn!("S3 endpoint set without a region; region will be taken from bucket names");
        }

        Ok(())
    }

    /// Fetch timeouts derived from these settings
    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::new()
            .with_fetch_timeout(Duration::from_secs(self.fetch_timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            fetch_timeout_secs: 30,
            connect_timeout_secs: 10,
            s3_region: None,
            s3_endpoint: None,
            s3_expiry_secs: DEFAULT_S3_EXPIRY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.s3_expiry_secs, 60);
        assert_eq!(settings.timeouts(), TimeoutConfig::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_environment_matches_defaults() {
        assert_eq!(from_vars(&[]).unwrap(), Settings::default());
    }

    #[test]
    fn test_overrides() {
        let settings = from_vars(&[
            ("LOG_LEVEL", "debug"),
            ("REMOTECONFIG_FETCH_TIMEOUT_SECS", "5"),
            ("REMOTECONFIG_S3_REGION", "eu-west-1"),
            ("REMOTECONFIG_S3_ENDPOINT", "http://localhost:8500"),
            ("REMOTECONFIG_S3_EXPIRY_SECS", "300"),
        ])
        .unwrap();

        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.timeouts().fetch_timeout, Duration::from_secs(5));
        assert_eq!(settings.s3_region, Some(AwsRegion::EuWest1));
        assert_eq!(settings.s3_endpoint.as_deref(), Some("http://localhost:8500"));
        assert_eq!(settings.s3_expiry_secs, 300);
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let settings = from_vars(&[("APP_NAME", "other"), ("APP_VERSION", "9.9.9")]).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_empty_region_is_unset() {
        let settings = from_vars(&[("REMOTECONFIG_S3_REGION", "")]).unwrap();
        assert_eq!(settings.s3_region, None);
    }

    #[test]
    fn test_invalid_values() {
        assert!(from_vars(&[("REMOTECONFIG_S3_REGION", "mars-1")]).is_err());
        assert!(from_vars(&[("REMOTECONFIG_FETCH_TIMEOUT_SECS", "soon")]).is_err());
        assert!(from_vars(&[("REMOTECONFIG_CONNECT_TIMEOUT_SECS", "0")]).is_err());
        assert!(from_vars(&[("REMOTECONFIG_S3_EXPIRY_SECS", "0")]).is_err());
    }
}
