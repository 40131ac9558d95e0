//! Utility modules
//!
//! Contains timeout handling for document fetches.

pub mod timeout;

pub use timeout::{with_timeout, TimeoutConfig, TimeoutError};
