use serde::{Deserialize, Serialize};

use crate::common::{normalize_pagination, DEFAULT_PAGE_SIZE};
use crate::error::AppError;
use crate::feature_flags::FeatureFlags;

/// Base URL used when the config file does not name one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Client configuration matching `config.toml`.
///
/// ```toml
/// api_base_url = "https://api.example.com"
/// default_page_size = 25
///
/// [features]
/// export = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: u64,
    #[serde(default)]
    pub features: FeatureFlags,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_page_size: default_page_size(),
            features: FeatureFlags::default(),
        }
    }
}

impl ClientConfig {
    /// Parse a TOML document. Page size is clamped to the API's range and a
    /// trailing slash on the base URL is dropped.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let mut config: ClientConfig = toml::from_str(contents)
            .map_err(|e| AppError::bad_request(format!("Invalid client config: {e}")))?;
        config.normalize();
        Ok(config)
    }

    /// Replace the base URL, e.g. from a build-time environment override.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        if !url.trim().is_empty() {
            self.api_base_url = url.trim().to_string();
            self.normalize();
        }
        self
    }

    fn normalize(&mut self) {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        let (_, limit) = normalize_pagination(None, Some(self.default_page_size));
        self.default_page_size = limit;
    }

    /// Join an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
