//! Value types shared by the configuration schemas

mod enumeration;
mod region;
mod storage;

pub use enumeration::ClosedEnum;
pub use region::AwsRegion;
pub use storage::{StorageLocation, StorageProvider};
