//! SDK configuration
//!
//! `SdkConfig` holds the externally adjustable knobs: base URL, page buffer
//! size, and the settings of the default reqwest transport. It can be built in
//! code or loaded from YAML.

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_PAGE_BUFFER_SIZE;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public PokeAPI host
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co";

/// Configuration for an [`Sdk`](crate::Sdk)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    /// Base URL that listing and detail paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of items a background stream may buffer ahead of its consumer
    #[serde(default = "default_page_buffer_size")]
    pub page_buffer_size: usize,

    /// Request timeout for the default transport, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent for the default transport
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_buffer_size() -> usize {
    DEFAULT_PAGE_BUFFER_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pokeapi-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_buffer_size: default_page_buffer_size(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl SdkConfig {
    /// Create a new config builder
    pub fn builder() -> SdkConfigBuilder {
        SdkConfigBuilder::default()
    }

    /// Parse a config from a YAML string. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Request timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check the config and return the parsed base URL
    pub fn validate(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base_url '{}' cannot be used as a base",
                self.base_url
            )));
        }
        Ok(url)
    }
}

/// Builder for [`SdkConfig`]
#[derive(Default)]
pub struct SdkConfigBuilder {
    config: SdkConfig,
}

impl SdkConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the stream buffer size
    pub fn page_buffer_size(mut self, size: usize) -> Self {
        self.config.page_buffer_size = size;
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_secs = timeout.as_secs();
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> SdkConfig {
        self.config
    }
}
