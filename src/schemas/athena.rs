//! Athena client and query bindings

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::types::AwsRegion;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaClientConfig {
    pub region: Option<AwsRegion>,
}

config_object! {
    AthenaClientConfig {
        required region,
    }
}

/// Where query results are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AthenaQueryConfig {
    pub output_bucket: Option<String>,
}

config_object! {
    AthenaQueryConfig {
        required output_bucket,
    }
}

impl AthenaQueryConfig {
    pub fn output_bucket(&self) -> &str {
        self.output_bucket.as_deref().unwrap_or_default()
    }
}
