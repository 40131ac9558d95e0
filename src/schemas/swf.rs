//! Simple Workflow Service bindings

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::types::AwsRegion;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleWorkflowClientConfig {
    pub region: Option<AwsRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_ssl: Option<bool>,
}

config_object! {
    SimpleWorkflowClientConfig {
        required region,
        optional endpoint,
        optional disable_ssl,
    }
}

impl SimpleWorkflowClientConfig {
    pub fn region(&self) -> Option<AwsRegion> {
        self.region
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn disable_ssl(&self) -> bool {
        self.disable_ssl.unwrap_or(false)
    }
}

/// Workflow type name and version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowType {
    pub name: Option<String>,
    pub version: Option<String>,
}

config_object! {
    WorkflowType {
        required name,
        required version,
    }
}

/// Domain and workflow type a worker polls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleWorkflowConfig {
    pub domain: Option<String>,
    pub workflow_type: Option<WorkflowType>,
}

config_object! {
    SimpleWorkflowConfig {
        required domain,
        required workflow_type,
    }
}

impl SimpleWorkflowConfig {
    pub fn domain(&self) -> &str {
        self.domain.as_deref().unwrap_or_default()
    }

    pub fn workflow_type(&self) -> Option<&WorkflowType> {
        self.workflow_type.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Location, ValidationError};
    use crate::validation::validate;

    #[test]
    fn test_workflow_config() {
        let config: SimpleWorkflowConfig = serde_json::from_str(
            r#"{"domain":"test","workflow_type":{"name":"ingest","version":"1.0"}}"#,
        )
        .unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.domain(), "test");
        assert_eq!(
            config.workflow_type().and_then(|t| t.version.as_deref()),
            Some("1.0")
        );
    }

    #[test]
    fn test_nested_workflow_type() {
        let config: SimpleWorkflowConfig =
            serde_json::from_str(r#"{"domain":"test","workflow_type":{"name":"ingest"}}"#).unwrap();
        assert_eq!(
            validate(&config),
            Err(ValidationError::SubfieldValidation {
                field: "workflow_type",
                at: Location::Value,
                source: Box::new(ValidationError::FieldNotSet("version")),
            })
        );
    }

    #[test]
    fn test_client_config() {
        let config: SimpleWorkflowClientConfig =
            serde_json::from_str(r#"{"region":"eu-west-1","disable_ssl":true}"#).unwrap();
        assert!(validate(&config).is_ok());
        assert!(config.disable_ssl());
        assert_eq!(config.region(), Some(AwsRegion::EuWest1));
        assert_eq!(config.endpoint(), None);
        assert!(!SimpleWorkflowClientConfig::default().disable_ssl());
    }
}
