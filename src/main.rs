//! remoteconfig
//!
//! Operator CLI: validate a remote configuration document against one of the
//! known schemas, or mint a presigned URL for an S3 object.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use remoteconfig::{
    config::Settings,
    error::LoadError,
    s3::{build_signed_url, parse_locator, Presigner, SdkPresigner},
    schemas::{
        ApiEndpointConfig, AthenaClientConfig, AthenaQueryConfig, CloudfrontConfig,
        DynamoDbClientConfig, DynamoDbConfig, DynamoDbTableConfig, S3Config,
        S3EndpointExpiryConfig, SimpleWorkflowClientConfig, SimpleWorkflowConfig, SqsClientConfig,
        SqsConfig, SqsQueueConfig, StorageConfig,
    },
    types::{AwsRegion, ClosedEnum},
    validation::ConfigObject,
    loader::is_s3_url,
    ConfigLoader, S3Access,
};
use serde::de::DeserializeOwned;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Remote configuration loader
///
/// Fetches, decodes and validates JSON configuration documents.
#[derive(Parser, Debug)]
#[command(name = "remoteconfig")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a document and validate it against a schema
    Check {
        /// Schema the document must satisfy
        #[arg(long, value_enum)]
        schema: Schema,

        /// http://, https:// or s3:// URL of the document
        url: String,
    },

    /// Print a presigned GET URL for an S3 object
    Presign {
        /// s3://bucket/key URL of the object
        s3_url: String,

        /// Signing region (defaults to REMOTECONFIG_S3_REGION, then the bucket name suffix)
        #[arg(long)]
        region: Option<String>,

        /// URL lifetime in seconds (defaults to REMOTECONFIG_S3_EXPIRY_SECS)
        #[arg(long)]
        expiry: Option<u64>,

        /// Custom S3 endpoint; switches to path-style addressing
        #[arg(long)]
        endpoint: Option<String>,
    },
}

/// Known configuration schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Schema {
    SqsQueue,
    SqsClient,
    Sqs,
    DynamodbTable,
    DynamodbClient,
    Dynamodb,
    S3,
    S3EndpointExpiry,
    Storage,
    Cloudfront,
    SwfClient,
    Swf,
    AthenaClient,
    AthenaQuery,
    ApiEndpoint,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration first (before logging, so we can use log_level)
    let mut settings = Settings::load()?;
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    init_tracing(&settings.log_level);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Starting remoteconfig");

    match args.command {
        Command::Check { schema, url } => check(&settings, schema, &url).await,
        Command::Presign {
            s3_url,
            region,
            expiry,
            endpoint,
        } => {
            presign(&settings, &s3_url, region, expiry, endpoint).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn check(settings: &Settings, schema: Schema, url: &str) -> Result<ExitCode> {
    let mut loader = ConfigLoader::from_settings(settings).context("Failed to create loader")?;
    if is_s3_url(url) {
        let presigner: Arc<dyn Presigner> = Arc::new(SdkPresigner::from_settings(settings).await);
        loader = loader.with_s3(S3Access::from_settings(presigner, settings));
    }

    let result = match schema {
        Schema::SqsQueue => load::<SqsQueueConfig>(&loader, url).await,
        Schema::SqsClient => load::<SqsClientConfig>(&loader, url).await,
        Schema::Sqs => load::<SqsConfig>(&loader, url).await,
        Schema::DynamodbTable => load::<DynamoDbTableConfig>(&loader, url).await,
        Schema::DynamodbClient => load::<DynamoDbClientConfig>(&loader, url).await,
        Schema::Dynamodb => load::<DynamoDbConfig>(&loader, url).await,
        Schema::S3 => load::<S3Config>(&loader, url).await,
        Schema::S3EndpointExpiry => load::<S3EndpointExpiryConfig>(&loader, url).await,
        Schema::Storage => load::<StorageConfig>(&loader, url).await,
        Schema::Cloudfront => load::<CloudfrontConfig>(&loader, url).await,
        Schema::SwfClient => load::<SimpleWorkflowClientConfig>(&loader, url).await,
        Schema::Swf => load::<SimpleWorkflowConfig>(&loader, url).await,
        Schema::AthenaClient => load::<AthenaClientConfig>(&loader, url).await,
        Schema::AthenaQuery => load::<AthenaQueryConfig>(&loader, url).await,
        Schema::ApiEndpoint => load::<ApiEndpointConfig>(&loader, url).await,
    };

    match result {
        Ok(()) => {
            println!("OK");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", err);
            if let LoadError::Validation(validation) = &err {
                let path = validation.path();
                if !path.is_empty() {
                    eprintln!("  at: {}", path);
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn load<C>(loader: &ConfigLoader, url: &str) -> Result<(), LoadError>
where
    C: DeserializeOwned + ConfigObject,
{
    loader.load::<C>(url).await.map(|_| ())
}

async fn presign(
    settings: &Settings,
    s3_url: &str,
    region: Option<String>,
    expiry: Option<u64>,
    endpoint: Option<String>,
) -> Result<()> {
    let region = match region {
        Some(region) => region,
        None => match settings.s3_region {
            Some(region) => region.as_str().to_string(),
            None => {
                let locator = parse_locator(s3_url)?;
                let (_, region) = AwsRegion::from_bucket_suffix(locator.bucket())
                    .with_context(|| format!("No --region given and none found in bucket '{}'", locator.bucket()))?;
                region.as_str().to_string()
            }
        },
    };
    let endpoint = endpoint.or_else(|| settings.s3_endpoint.clone());

    let presigner = SdkPresigner::from_settings(settings).await;
    let url = build_signed_url(
        &presigner,
        s3_url,
        &region,
        expiry.unwrap_or(settings.s3_expiry_secs),
        endpoint.as_deref(),
    )
    .await
    .context("Failed to presign S3 URL")?;

    println!("{}", url);
    Ok(())
}

/// Initialize tracing subscriber with the specified log level
///
/// Logs go to stderr as JSON so stdout carries only command output.
fn init_tracing(log_level: &str) {
    // Build filter from RUST_LOG env var or use provided log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let console_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
