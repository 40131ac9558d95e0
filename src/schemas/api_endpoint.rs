//! HTTP API endpoint binding

use serde::{Deserialize, Serialize};

use crate::config_object;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpointConfig {
    pub base_path: Option<String>,
    pub sub_path: Option<String>,
}

config_object! {
    ApiEndpointConfig {
        required base_path,
        required sub_path,
    }
}

impl ApiEndpointConfig {
    /// `<base_path>/<sub_path>`
    pub fn full_path(&self) -> String {
        format!(
            "{}/{}",
            self.base_path.as_deref().unwrap_or_default(),
            self.sub_path.as_deref().unwrap_or_default()
        )
    }

    /// `<base_path>/<sub_path>/<id>`
    pub fn full_path_with_id(&self, id: &str) -> String {
        format!("{}/{}", self.full_path(), id)
    }
}
