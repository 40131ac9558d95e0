//! Configuration schemas
//!
//! Each type mirrors one JSON object shape. Every field is an `Option` so that
//! an absent key decodes to `None` and the validator, not serde, decides
//! whether that is acceptable. Unknown keys are ignored.

pub mod api_endpoint;
pub mod athena;
pub mod cloudfront;
pub mod dynamodb;
pub mod s3;
pub mod sqs;
pub mod storage;
pub mod swf;

pub use api_endpoint::ApiEndpointConfig;
pub use athena::{AthenaClientConfig, AthenaQueryConfig};
pub use cloudfront::CloudfrontConfig;
pub use dynamodb::{DynamoDbClientConfig, DynamoDbConfig, DynamoDbTableConfig};
pub use s3::{S3Config, S3EndpointExpiryConfig};
pub use sqs::{SqsClientConfig, SqsConfig, SqsQueueConfig};
pub use storage::StorageConfig;
pub use swf::{SimpleWorkflowClientConfig, SimpleWorkflowConfig, WorkflowType};
