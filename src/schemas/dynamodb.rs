//! DynamoDB table and client bindings

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::error::ValidationError;
use crate::types::AwsRegion;

/// A DynamoDB table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamoDbTableConfig {
    pub table_name: Option<String>,
}

config_object! {
    DynamoDbTableConfig {
        required table_name,
    }
}

impl DynamoDbTableConfig {
    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or_default()
    }
}

/// DynamoDB client settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamoDbClientConfig {
    pub region: Option<AwsRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,
}

config_object! {
    DynamoDbClientConfig {
        required region,
        optional endpoint,
        optional disable_ssl,
    }
}

impl DynamoDbClientConfig {
    pub fn region(&self) -> Option<AwsRegion> {
        self.region
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn disable_ssl(&self) -> bool {
        self.disable_ssl.unwrap_or(false)
    }

    /// Endpoint as a URL, adding `http://` or `https://` (per `disable_ssl`)
    /// when the configured endpoint has no scheme.
    pub fn endpoint_url(&self) -> Option<String> {
        let endpoint = self.endpoint()?;
        if endpoint.contains("://") {
            return Some(endpoint.to_string());
        }
        let scheme = if self.disable_ssl() { "http" } else { "https" };
        Some(format!("{}://{}", scheme, endpoint))
    }
}

/// Table binding with its own region.
///
/// Carries its own semantic check in addition to the field walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamoDbConfig {
    pub region: Option<AwsRegion>,
    pub table_name: Option<String>,
}

config_object! {
    DynamoDbConfig: check_binding {
        required region,
        required table_name,
    }
}

impl DynamoDbConfig {
    fn check_binding(&self) -> Result<(), ValidationError> {
        if self.region.is_none() {
            return Err(ValidationError::Invalid("Invalid DynamoDB Region".to_string()));
        }
        if self.table_name.as_deref().map_or(true, str::is_empty) {
            return Err(ValidationError::Invalid(
                "Invalid DynamoDB Table Name".to_string(),
            ));
        }
        Ok(())
    }

    pub fn region(&self) -> Option<AwsRegion> {
        self.region
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or_default()
    }
}
