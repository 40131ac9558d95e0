//! Error types for validation, locator parsing, signing and loading

use std::fmt;

use thiserror::Error;

/// Boxed error returned by signing collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Where inside a field a nested failure occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// The field value itself.
    Value,
    /// An element of a sequence field.
    Index(usize),
    /// An entry of a mapping field.
    Key(String),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Value => Ok(()),
            Location::Index(index) => write!(f, "[{}]", index),
            Location::Key(key) => write!(f, "['{}']", key),
        }
    }
}

/// Closed-enumeration violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    #[error("{kind} cannot be empty")]
    Empty { kind: &'static str },

    #[error("{kind} '{value}' is invalid")]
    Invalid { kind: &'static str, value: String },
}

/// First invariant violated by a configuration object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field `{0}` is not set")]
    FieldNotSet(&'static str),

    #[error("string field `{0}` contains an empty string")]
    StringEmpty(&'static str),

    #[error("sequence field `{0}` is empty")]
    SliceEmpty(&'static str),

    #[error("sub field `{field}{at}` failed to validate: {source}")]
    SubfieldValidation {
        field: &'static str,
        at: Location,
        #[source]
        source: Box<ValidationError>,
    },

    #[error("{type_name} failed to validate: {source}")]
    TypeValidation {
        type_name: &'static str,
        #[source]
        source: Box<ValidationError>,
    },

    #[error(transparent)]
    Enum(#[from] EnumError),

    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    pub(crate) fn subfield(field: &'static str, at: Location, source: ValidationError) -> Self {
        ValidationError::SubfieldValidation {
            field,
            at,
            source: Box::new(source),
        }
    }

    /// The innermost error of the chain.
    pub fn leaf(&self) -> &ValidationError {
        match self {
            ValidationError::SubfieldValidation { source, .. }
            | ValidationError::TypeValidation { source, .. } => source.leaf(),
            other => other,
        }
    }

    /// Dotted path from the validated object down to the failing field,
    /// e.g. `storage_config_map['one'].location`.
    ///
    /// Empty when the failure belongs to the object itself rather than a field.
    pub fn path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self;
        loop {
            match current {
                ValidationError::SubfieldValidation { field, at, source } => {
                    segments.push(format!("{}{}", field, at));
                    current = source;
                }
                ValidationError::TypeValidation { source, .. } => current = source,
                ValidationError::FieldNotSet(field)
                | ValidationError::StringEmpty(field)
                | ValidationError::SliceEmpty(field) => {
                    segments.push((*field).to_string());
                    break;
                }
                ValidationError::Enum(_) | ValidationError::Invalid(_) => break,
            }
        }
        segments.join(".")
    }
}

/// Storage locator parse failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("failed to parse S3 URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("S3 URL does not have the s3:// scheme, found '{0}'")]
    InvalidScheme(String),

    #[error("S3 URL has no bucket")]
    MissingBucket,

    #[error("S3 URL key is not valid UTF-8: '{0}'")]
    InvalidKey(String),

    #[error("Region not found in bucket name, {0}")]
    RegionNotFound(String),
}

/// The signer rejected or failed the request
#[derive(Error, Debug)]
#[error("failed to presign S3 request: {0}")]
pub struct SigningError(#[source] pub BoxError);

impl SigningError {
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self(err.into())
    }
}

/// Presigned URL construction failures; collaborator errors pass through untouched
#[derive(Error, Debug)]
pub enum PresignError {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error(transparent)]
    Region(#[from] EnumError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}

/// Failures of a fetch-decode-validate cycle
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{url}' timed out after {timeout:?}")]
    Timeout {
        url: String,
        timeout: std::time::Duration,
    },

    #[error("Request to '{url}' returned non-200 OK status '{status}: {reason}'")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("unsupported config URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("s3:// config URLs need S3 access to be configured")]
    S3AccessMissing,

    #[error("Failed to decode JSON, with error, {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Presign(#[from] PresignError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested() -> ValidationError {
        ValidationError::subfield(
            "storage_config_map",
            Location::Key("one".to_string()),
            ValidationError::TypeValidation {
                type_name: "StorageConfig",
                source: Box::new(ValidationError::Enum(EnumError::Empty { kind: "Region" })),
            },
        )
    }

    #[test]
    fn test_display_chains_causes() {
        assert_eq!(
            nested().to_string(),
            "sub field `storage_config_map['one']` failed to validate: \
             StorageConfig failed to validate: Region cannot be empty"
        );
    }

    #[test]
    fn test_leaf() {
        assert_eq!(
            nested().leaf(),
            &ValidationError::Enum(EnumError::Empty { kind: "Region" })
        );
    }

    #[test]
    fn test_path() {
        assert_eq!(nested().path(), "storage_config_map['one']");

        let err = ValidationError::subfield(
            "storage_config_slice",
            Location::Index(2),
            ValidationError::StringEmpty("location"),
        );
        assert_eq!(err.path(), "storage_config_slice[2].location");
        assert_eq!(ValidationError::FieldNotSet("str").path(), "str");
    }

    #[test]
    fn test_presign_error_is_transparent() {
        let err = PresignError::from(EnumError::Invalid {
            kind: "Region",
            value: "mars-1".to_string(),
        });
        assert_eq!(err.to_string(), "Region 'mars-1' is invalid");
        assert!(matches!(err, PresignError::Region(EnumError::Invalid { .. })));
    }
}
