//! Client configuration
//!
//! A profile is a small YAML file carrying the endpoint and an access
//! token, plus the pagination defaults. The token can also come from the
//! `EDUKIT_ACCESS_TOKEN` environment variable, which wins over the file.

use crate::error::{Error, Result};
use crate::page::PageLimit;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default API endpoint
pub const DEFAULT_BASE_URL: &str = "https://classroom.googleapis.com";

/// Environment variable overriding the profile's access token
pub const TOKEN_ENV_VAR: &str = "EDUKIT_ACCESS_TOKEN";

/// Client configuration, loadable from a YAML profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token attached to every request
    #[serde(default)]
    pub access_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size requested from listing endpoints
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Maximum pages fetched per listing call (0 = unbounded)
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    100
}

fn default_max_pages() -> u32 {
    1_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl ClientConfig {
    /// Load a profile from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse a profile from a YAML string
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// Apply environment overrides (currently just the token)
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                self.access_token = Some(token);
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        Url::parse(&self.base_url)?;
        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }
        Ok(())
    }

    /// The pagination guard implied by `max_pages`
    pub fn page_limit(&self) -> PageLimit {
        if self.max_pages == 0 {
            PageLimit::unbounded()
        } else {
            PageLimit::pages(self.max_pages)
        }
    }
}
