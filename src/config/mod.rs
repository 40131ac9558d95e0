//! Configuration management module
//!
//! This module handles loading and validating process settings from
//! environment variables and .env files, and building AWS SDK clients.

pub mod aws;
pub mod settings;

pub use aws::{build_aws_config, create_dynamodb_client, s3_config, AwsConfigBuilder};
pub use settings::Settings;
