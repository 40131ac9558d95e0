//! Field descriptors and per-kind presence/content rules

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::walker::{validate, ConfigObject};
use crate::error::{Location, ValidationError};

/// A value the walker knows how to inspect once it is present.
pub trait FieldValue {
    /// Check a present value held by the field `name`.
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError>;

    /// Check the value as an element of a sequence or an entry of a mapping.
    ///
    /// Only configuration objects are inspected as elements; everything else
    /// passes.
    fn check_element(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum FieldKind<'a> {
    Required(Option<&'a dyn FieldValue>),
    Optional(Option<&'a dyn FieldValue>),
    Embedded(&'a dyn ConfigObject),
    Skipped,
}

/// One declared field of a configuration object.
///
/// Absence is always `None`; whether that is allowed is decided by the
/// descriptor, not by the field's type.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    kind: FieldKind<'a>,
}

impl<'a> Field<'a> {
    /// A field that must be present.
    pub fn required<T: FieldValue>(name: &'static str, value: &'a Option<T>) -> Self {
        Self {
            name,
            kind: FieldKind::Required(value.as_ref().map(|v| v as &dyn FieldValue)),
        }
    }

    /// A field that may be absent. A present value is still checked.
    pub fn optional<T: FieldValue>(name: &'static str, value: &'a Option<T>) -> Self {
        Self {
            name,
            kind: FieldKind::Optional(value.as_ref().map(|v| v as &dyn FieldValue)),
        }
    }

    /// A flattened substructure: never presence-checked, its own fields are
    /// validated as if declared on the parent.
    pub fn embedded<C: ConfigObject>(name: &'static str, value: &'a C) -> Self {
        Self {
            name,
            kind: FieldKind::Embedded(value),
        }
    }

    /// A field the walker does not look at (callbacks, opaque handles).
    pub fn skipped<T: ?Sized>(name: &'static str, _value: &'a T) -> Self {
        Self {
            name,
            kind: FieldKind::Skipped,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_optional(&self) -> bool {
        matches!(self.kind, FieldKind::Optional(_))
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        match self.kind {
            FieldKind::Required(None) => Err(ValidationError::FieldNotSet(self.name)),
            FieldKind::Optional(None) | FieldKind::Skipped => Ok(()),
            FieldKind::Required(Some(value)) | FieldKind::Optional(Some(value)) => {
                value.check_field(self.name)
            }
            FieldKind::Embedded(inner) => validate(inner),
        }
    }
}

impl FieldValue for String {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::StringEmpty(name));
        }
        Ok(())
    }
}

macro_rules! scalar_field {
    ($($t:ty),+) => {$(
        impl FieldValue for $t {
            fn check_field(&self, _name: &'static str) -> Result<(), ValidationError> {
                Ok(())
            }
        }
    )+};
}

scalar_field!(bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<T: FieldValue> FieldValue for Vec<T> {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::SliceEmpty(name));
        }
        for (index, element) in self.iter().enumerate() {
            element
                .check_element()
                .map_err(|source| ValidationError::subfield(name, Location::Index(index), source))?;
        }
        Ok(())
    }
}

impl<T: FieldValue, S: BuildHasher> FieldValue for HashMap<String, T, S> {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        check_entries(name, self.iter())
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        check_entries(name, self.iter())
    }
}

fn check_entries<'a, T: FieldValue + 'a>(
    name: &'static str,
    entries: impl Iterator<Item = (&'a String, &'a T)>,
) -> Result<(), ValidationError> {
    for (key, value) in entries {
        value
            .check_element()
            .map_err(|source| ValidationError::subfield(name, Location::Key(key.clone()), source))?;
    }
    Ok(())
}

/// `null` elements inside collections are skipped.
impl<T: FieldValue> FieldValue for Option<T> {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.check_field(name),
            None => Ok(()),
        }
    }

    fn check_element(&self) -> Result<(), ValidationError> {
        match self {
            Some(value) => value.check_element(),
            None => Ok(()),
        }
    }
}

impl<T: FieldValue + ?Sized> FieldValue for Box<T> {
    fn check_field(&self, name: &'static str) -> Result<(), ValidationError> {
        (**self).check_field(name)
    }

    fn check_element(&self) -> Result<(), ValidationError> {
        (**self).check_element()
    }
}
