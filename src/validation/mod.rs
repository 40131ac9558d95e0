//! Structural validation of decoded configuration objects
//!
//! Every configuration type declares its fields once, in declaration order,
//! tagging each as `required`, `optional`, `embedded` or `skipped`. The
//! walker then enforces the same rules for every type:
//!
//! - a required field that is absent fails with `FieldNotSet`;
//! - an optional field that is absent is skipped entirely;
//! - a present string must be non-empty;
//! - a present sequence must be non-empty, and each configuration object in
//!   it is validated in order;
//! - each configuration object in a present mapping is validated;
//! - nested configuration objects are validated recursively.

mod field;
mod walker;

pub use field::{Field, FieldValue};
pub use walker::{validate, ConfigObject};

/// Implement [`ConfigObject`] and [`FieldValue`] for a configuration struct.
///
/// ```ignore
/// config_object! {
///     StorageConfig: check_location {
///         required provider,
///         required location,
///     }
/// }
/// ```
///
/// The optional `: method` names an inherent `fn(&self) -> Result<(),
/// ValidationError>` run before the fields are walked.
#[macro_export]
macro_rules! config_object {
    ($ty:ident $(: $check:ident)? { $($presence:ident $field:ident),* $(,)? }) => {
        impl $crate::validation::ConfigObject for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            $(
                fn check(&self) -> ::std::result::Result<(), $crate::error::ValidationError> {
                    self.$check()
                }
            )?

            fn fields(&self) -> ::std::vec::Vec<$crate::validation::Field<'_>> {
                ::std::vec![
                    $( $crate::validation::Field::$presence(stringify!($field), &self.$field) ),*
                ]
            }
        }

        impl $crate::validation::FieldValue for $ty {
            fn check_field(
                &self,
                name: &'static str,
            ) -> ::std::result::Result<(), $crate::error::ValidationError> {
                $crate::validation::validate(self).map_err(|source| {
                    $crate::error::ValidationError::SubfieldValidation {
                        field: name,
                        at: $crate::error::Location::Value,
                        source: ::std::boxed::Box::new(source),
                    }
                })
            }

            fn check_element(&self) -> ::std::result::Result<(), $crate::error::ValidationError> {
                $crate::validation::validate(self)
            }
        }
    };
}
