//! CloudFront distribution binding

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::types::AwsRegion;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CloudfrontConfig {
    pub region: Option<AwsRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    pub aws_account_id: Option<String>,
    pub distribution_id: Option<String>,
    pub base_path: Option<String>,
}

config_object! {
    CloudfrontConfig {
        required region,
        optional endpoint,
        required aws_account_id,
        required distribution_id,
        required base_path,
    }
}

impl CloudfrontConfig {
    pub fn region(&self) -> Option<AwsRegion> {
        self.region
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn distribution_id(&self) -> &str {
        self.distribution_id.as_deref().unwrap_or_default()
    }

    pub fn base_path(&self) -> &str {
        self.base_path.as_deref().unwrap_or_default()
    }
}
