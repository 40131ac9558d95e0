//! Error types

mod types;

pub use types::{
    BoxError, EnumError, LoadError, Location, LocatorError, PresignError, SigningError,
    ValidationError,
};
