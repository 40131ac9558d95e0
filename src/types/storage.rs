//! Storage provider and location values

use std::fmt;

use serde::{Deserialize, Serialize};

use super::enumeration::{impl_closed_enum, ClosedEnum};
use crate::error::ValidationError;
use crate::validation::FieldValue;

/// Backing storage provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StorageProvider {
    Aws,
}

impl ClosedEnum for StorageProvider {
    const KIND: &'static str = "Storage provider";

    const VARIANTS: &'static [Self] = &[StorageProvider::Aws];

    fn as_str(&self) -> &'static str {
        match self {
            StorageProvider::Aws => "aws",
        }
    }
}

impl_closed_enum!(StorageProvider);

/// Provider specific location; for `aws` this is a region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageLocation(String);

impl StorageLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FieldValue for StorageLocation {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        self.0.check_field(name)
    }
}
