//! Remote configuration loader
//!
//! Fetches JSON configuration documents over HTTP(S) or S3, decodes them into
//! typed structs and validates required fields, non-empty values and closed
//! enumerations before the application uses them.

// Public modules
pub mod config;
pub mod error;
pub mod loader;
pub mod s3;
pub mod schemas;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Settings;
pub use error::{LoadError, PresignError, ValidationError};
pub use loader::{from_json_str, load_config_from_url, read_json_validate, ConfigLoader, S3Access};
pub use s3::{build_signed_url, Presigner, SdkPresigner};
pub use validation::{validate, ConfigObject};
