//! S3 locators and presigned URLs

pub mod locator;
pub mod signing;

pub use locator::{parse_locator, S3Locator, S3_SCHEME};
pub use signing::{
    build_signed_url, PresignRequest, Presigner, SdkPresigner, DEFAULT_S3_ENDPOINT,
    DEFAULT_S3_EXPIRY,
};
