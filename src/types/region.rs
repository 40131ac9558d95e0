//! AWS regions accepted in configuration documents

use serde::{Deserialize, Serialize};

use super::enumeration::{impl_closed_enum, ClosedEnum};

/// AWS region identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AwsRegion {
    UsEast1,
    UsWest1,
    UsWest2,
    EuWest1,
    EuCentral1,
    ApSoutheast1,
    ApSoutheast2,
    ApNortheast1,
    SaEast1,
}

impl ClosedEnum for AwsRegion {
    const KIND: &'static str = "Region";

    const VARIANTS: &'static [Self] = &[
        AwsRegion::UsEast1,
        AwsRegion::UsWest1,
        AwsRegion::UsWest2,
        AwsRegion::EuWest1,
        AwsRegion::EuCentral1,
        AwsRegion::ApSoutheast1,
        AwsRegion::ApSoutheast2,
        AwsRegion::ApNortheast1,
        AwsRegion::SaEast1,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AwsRegion::UsEast1 => "us-east-1",
            AwsRegion::UsWest1 => "us-west-1",
            AwsRegion::UsWest2 => "us-west-2",
            AwsRegion::EuWest1 => "eu-west-1",
            AwsRegion::EuCentral1 => "eu-central-1",
            AwsRegion::ApSoutheast1 => "ap-southeast-1",
            AwsRegion::ApSoutheast2 => "ap-southeast-2",
            AwsRegion::ApNortheast1 => "ap-northeast-1",
            AwsRegion::SaEast1 => "sa-east-1",
        }
    }
}

impl_closed_enum!(AwsRegion);

impl AwsRegion {
    /// Split a `<base>-<region>` bucket name into its base and region.
    pub fn from_bucket_suffix(bucket: &str) -> Option<(&str, AwsRegion)> {
        Self::VARIANTS.iter().copied().find_map(|region| {
            bucket
                .strip_suffix(region.as_str())
                .and_then(|rest| rest.strip_suffix('-'))
                .filter(|base| !base.is_empty())
                .map(|base| (base, region))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnumError;

    #[test]
    fn test_round_trip_every_region() {
        for region in AwsRegion::VARIANTS {
            let decoded: AwsRegion = region.as_str().parse().unwrap();
            assert_eq!(decoded, *region);
            assert_eq!(decoded.to_string(), region.as_str());
            assert!(AwsRegion::validate_str(region.as_str()).is_ok());
        }
    }

    #[test]
    fn test_empty_region() {
        assert_eq!(
            "".parse::<AwsRegion>(),
            Err(EnumError::Empty { kind: "Region" })
        );
    }

    #[test]
    fn test_invalid_region() {
        assert_eq!(
            "invalidregion".parse::<AwsRegion>(),
            Err(EnumError::Invalid {
                kind: "Region",
                value: "invalidregion".to_string(),
            })
        );
        assert!("US-EAST-1".parse::<AwsRegion>().is_err());
    }

    #[test]
    fn test_json_decode_validates() {
        let region: AwsRegion = serde_json::from_str("\"eu-central-1\"").unwrap();
        assert_eq!(region, AwsRegion::EuCentral1);

        let err = serde_json::from_str::<AwsRegion>("\"invalidregion\"").unwrap_err();
        assert!(err.to_string().contains("Region 'invalidregion' is invalid"));

        let err = serde_json::from_str::<AwsRegion>("\"\"").unwrap_err();
        assert!(err.to_string().contains("Region cannot be empty"));
    }

    #[test]
    fn test_json_encode() {
        assert_eq!(
            serde_json::to_string(&AwsRegion::ApNortheast1).unwrap(),
            "\"ap-northeast-1\""
        );
    }

    #[test]
    fn test_from_bucket_suffix() {
        assert_eq!(
            AwsRegion::from_bucket_suffix("base-bucket-us-west-2"),
            Some(("base-bucket", AwsRegion::UsWest2))
        );
        assert_eq!(
            AwsRegion::from_bucket_suffix("foo-eu-central-1"),
            Some(("foo", AwsRegion::EuCentral1))
        );
        assert_eq!(AwsRegion::from_bucket_suffix("base-bucket-invalid-region"), None);
        assert_eq!(AwsRegion::from_bucket_suffix("us-west-2"), None);
    }
}
