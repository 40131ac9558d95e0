//! Provider-qualified storage location

use serde::{Deserialize, Serialize};

use crate::config_object;
use crate::error::ValidationError;
use crate::types::{AwsRegion, ClosedEnum, StorageLocation, StorageProvider};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub provider: Option<StorageProvider>,
    pub location: Option<StorageLocation>,
}

config_object! {
    StorageConfig: check_location {
        required provider,
        required location,
    }
}

impl StorageConfig {
    /// For `aws` the location must name a valid region. Absent fields are
    /// left to the field walk.
    fn check_location(&self) -> Result<(), ValidationError> {
        let (Some(provider), Some(location)) = (self.provider, self.location.as_ref()) else {
            return Ok(());
        };

        match provider {
            StorageProvider::Aws => AwsRegion::validate_str(location.as_str())?,
        }

        Ok(())
    }

    pub fn provider(&self) -> Option<StorageProvider> {
        self.provider
    }

    pub fn location(&self) -> Option<&StorageLocation> {
        self.location.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnumError;
    use crate::validation::validate;

    #[test]
    fn test_validate() {
        let config: StorageConfig =
            serde_json::from_str(r#"{"provider":"aws","location":"us-west-2"}"#).unwrap();
        assert!(validate(&config).is_ok());
        assert_eq!(config.provider(), Some(StorageProvider::Aws));
        assert_eq!(config.location(), Some(&StorageLocation::new("us-west-2")));
    }

    #[test]
    fn test_invalid_provider_fails_decode() {
        let result =
            serde_json::from_str::<StorageConfig>(r#"{"provider":"gcs","location":"us-west-2"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_location() {
        let config = StorageConfig {
            provider: Some(StorageProvider::Aws),
            location: Some(StorageLocation::new("nowhere")),
        };
        assert_eq!(
            validate(&config).unwrap_err().to_string(),
            "StorageConfig failed to validate: Region 'nowhere' is invalid"
        );
    }

    #[test]
    fn test_missing_location_is_not_set() {
        let config = StorageConfig {
            provider: Some(StorageProvider::Aws),
            location: None,
        };
        assert_eq!(
            validate(&config),
            Err(ValidationError::FieldNotSet("location"))
        );
    }

    #[test]
    fn test_empty_location_is_an_empty_region() {
        let config = StorageConfig {
            provider: Some(StorageProvider::Aws),
            location: Some(StorageLocation::new("")),
        };
        assert_eq!(
            validate(&config).unwrap_err().leaf(),
            &ValidationError::Enum(EnumError::Empty { kind: "Region" })
        );
    }

    #[test]
    fn test_missing_provider() {
        assert_eq!(
            validate(&StorageConfig::default()),
            Err(ValidationError::FieldNotSet("provider"))
        );
    }
}
