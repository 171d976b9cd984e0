//! Runtime configuration

use thiserror::Error;

/// Base URL of the public TVmaze API.
pub const DEFAULT_API_BASE: &str = "https://api.tvmaze.com";

/// Errors that can occur while building the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base is not an http(s) URL
    #[error("Invalid API base URL '{0}': expected an http:// or https:// URL")]
    InvalidApiBase(String),
}

/// Settings shared by all queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL requests are built from, without a trailing slash
    pub api_base: String,
}

impl Config {
    /// Creates a configuration for the given API base URL.
    ///
    /// Trailing slashes are removed so endpoint paths can be appended
    /// directly.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiBase` if the URL does not use the
    /// http or https scheme.
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let trimmed = api_base.trim().trim_end_matches('/');

        let has_host = ["https://", "http://"]
            .iter()
            .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));

        if !has_host {
            return Err(ConfigError::InvalidApiBase(api_base.to_string()));
        }

        Ok(Self {
            api_base: trimmed.to_string(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
