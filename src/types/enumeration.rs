//! Closed enumerations decoded from text
//!
//! Decoding and validation are one step: a value of a closed enum type is
//! always a member of its fixed set.

use crate::error::EnumError;

/// A fixed set of accepted string values.
pub trait ClosedEnum: Sized + Copy + 'static {
    /// Human readable name of the enumeration, used in errors.
    const KIND: &'static str;

    /// Every accepted value.
    const VARIANTS: &'static [Self];

    /// Wire representation.
    fn as_str(&self) -> &'static str;

    /// Decode a value; the empty string and unknown values are distinct errors.
    fn parse(value: &str) -> Result<Self, EnumError> {
        if value.is_empty() {
            return Err(EnumError::Empty { kind: Self::KIND });
        }

        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| EnumError::Invalid {
                kind: Self::KIND,
                value: value.to_string(),
            })
    }

    /// Check that `value` is a member without keeping the decoded value.
    fn validate_str(value: &str) -> Result<(), EnumError> {
        Self::parse(value).map(|_| ())
    }
}

/// Text conversions and walker support shared by every closed enum.
macro_rules! impl_closed_enum {
    ($($t:ty),+) => {$(
        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::types::ClosedEnum::as_str(self))
            }
        }

        impl std::str::FromStr for $t {
            type Err = $crate::error::EnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$t as $crate::types::ClosedEnum>::parse(s)
            }
        }

        impl TryFrom<String> for $t {
            type Error = $crate::error::EnumError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <$t as $crate::types::ClosedEnum>::parse(&value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                $crate::types::ClosedEnum::as_str(&value).to_string()
            }
        }

        // Membership is enforced when the value is decoded.
        impl $crate::validation::FieldValue for $t {
            fn check_field(&self, _name: &'static str) -> Result<(), $crate::error::ValidationError> {
                Ok(())
            }
        }
    )+};
}

pub(crate) use impl_closed_enum;
