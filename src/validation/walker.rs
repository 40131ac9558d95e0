//! Generic configuration walker
//!
//! Walks a configuration object's declared fields in declaration order and
//! reports the first violated invariant. The walk is a pure function of the
//! object: no I/O, no mutation, safe to call from many threads at once.

use super::field::Field;
use crate::error::ValidationError;

/// A decoded configuration record whose declared fields can be walked.
///
/// Usually implemented through [`config_object!`](crate::config_object).
pub trait ConfigObject {
    /// Type name used when a type-level check fails.
    fn type_name(&self) -> &'static str;

    /// Type-level semantic rules the field walk cannot express. Runs before
    /// the fields are walked.
    fn check(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Declared fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Validate a configuration object, first failure wins.
pub fn validate<C: ConfigObject + ?Sized>(config: &C) -> Result<(), ValidationError> {
    let type_name = config.type_name();
    tracing::trace!(type_name, "Validating config object");

    config
        .check()
        .map_err(|source| ValidationError::TypeValidation {
            type_name,
            source: Box::new(source),
        })?;

    for field in config.fields() {
        field.validate()?;
    }

    Ok(())
}
