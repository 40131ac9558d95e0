//! SQS queue and client bindings

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::types::{AwsRegion, ClosedEnum};

/// A single SQS queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqsQueueConfig {
    pub region: Option<AwsRegion>,
    pub aws_account_id: Option<String>,
    pub queue_name: Option<String>,
}

config_object! {
    SqsQueueConfig {
        required region,
        required aws_account_id,
        required queue_name,
    }
}

impl SqsQueueConfig {
    /// Full queue URL, e.g. `https://sqs.us-east-1.amazonaws.com/345833302425/testQueue`.
    pub fn url(&self) -> String {
        queue_url(self.region, &self.aws_account_id, &self.queue_name)
    }
}

/// SQS client settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqsClientConfig {
    pub region: Option<AwsRegion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

config_object! {
    SqsClientConfig {
        required region,
        optional endpoint,
    }
}

impl SqsClientConfig {
    pub fn region(&self) -> Option<AwsRegion> {
        self.region
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

/// Queue binding with an optional endpoint override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqsConfig {
    pub region: Option<AwsRegion>,
    pub aws_account_id: Option<String>,
    pub queue_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

config_object! {
    SqsConfig {
        required region,
        required aws_account_id,
        required queue_name,
        optional endpoint,
    }
}

impl SqsConfig {
    /// The endpoint when one is set, otherwise the regional queue URL.
    pub fn url(&self) -> String {
        match self.endpoint.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => endpoint.to_string(),
            _ => queue_url(self.region, &self.aws_account_id, &self.queue_name),
        }
    }
}

fn queue_url(region: Option<AwsRegion>, account: &Option<String>, queue: &Option<String>) -> String {
    format!(
        "https://sqs.{}.amazonaws.com/{}/{}",
        region.map(|r| r.as_str()).unwrap_or_default(),
        account.as_deref().unwrap_or_default(),
        queue.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::validation::validate;

    const QUEUE_URL: &str = "https://sqs.us-east-1.amazonaws.com/345833302425/testQueue";

    fn queue() -> SqsConfig {
        SqsConfig {
            region: Some(AwsRegion::UsEast1),
            aws_account_id: Some("345833302425".to_string()),
            queue_name: Some("testQueue".to_string()),
            endpoint: None,
        }
    }

    #[test]
    fn test_validate() {
        assert!(validate(&queue()).is_ok());

        let mut with_endpoint = queue();
        with_endpoint.endpoint = Some("http://localhost:3000/sqs".to_string());
        assert!(validate(&with_endpoint).is_ok());
    }

    #[test]
    fn test_validate_errors() {
        let mut config = queue();
        config.aws_account_id = Some(String::new());
        assert_eq!(
            validate(&config),
            Err(ValidationError::StringEmpty("aws_account_id"))
        );

        let mut config = queue();
        config.queue_name = Some(String::new());
        assert_eq!(
            validate(&config),
            Err(ValidationError::StringEmpty("queue_name"))
        );

        let mut config = queue();
        config.region = None;
        assert_eq!(validate(&config), Err(ValidationError::FieldNotSet("region")));
    }

    #[test]
    fn test_url() {
        assert_eq!(queue().url(), QUEUE_URL);

        let mut config = queue();
        config.endpoint = Some("http://localhost:3000/sqs".to_string());
        assert_eq!(config.url(), "http://localhost:3000/sqs");

        config.endpoint = Some(String::new());
        assert_eq!(config.url(), QUEUE_URL);
    }

    #[test]
    fn test_queue_config_url() {
        let config: SqsQueueConfig = serde_json::from_str(
            r#"{"region":"us-east-1","aws_account_id":"345833302425","queue_name":"testQueue"}"#,
        )
        .unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.url(), QUEUE_URL);
    }

    #[test]
    fn test_client_config() {
        let config: SqsClientConfig =
            serde_json::from_str(r#"{"region":"us-east-1","endpoint":"http://localhost:3000/sqs"}"#)
                .unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.region(), Some(AwsRegion::UsEast1));
        assert_eq!(config.endpoint(), Some("http://localhost:3000/sqs"));

        let config = SqsClientConfig {
            region: Some(AwsRegion::UsEast1),
            endpoint: Some(String::new()),
        };
        assert_eq!(validate(&config), Err(ValidationError::StringEmpty("endpoint")));
    }
}
