//! # Client Configuration Module
//!
//! This module loads the settings needed to reach the availability formatting
//! service. Values come from environment variables with defaults where
//! appropriate; the resulting [`ApiConfig`] is built once at startup and passed
//! to whoever needs it.
//!
//! ## Environment Variables
//!
//! - `TIMETEXT_API_BASE_URL`: Base URL of the formatting service (default: "http://localhost:8000/api/v1")
//! - `TIMETEXT_API_KEY`: Static key sent as `X-API-Key` (required)
//! - `TIMETEXT_ENDPOINT_PATH`: Path of the text generation endpoint (default: "/availability/")
//! - `TIMETEXT_REQUEST_TIMEOUT_SECONDS`: Optional request timeout; unset means no timeout

use eyre::{Result, WrapErr, eyre};
use std::env;

/// Default base URL of the formatting service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
/// Default path of the text generation endpoint
pub const DEFAULT_ENDPOINT_PATH: &str = "/availability/";

/// Connection settings for the availability formatting service
///
/// # Example
///
/// ```
/// use timetext_client::config::ApiConfig;
///
/// let config = ApiConfig::new("https://example.com/api/v1", "secret");
/// assert_eq!(config.endpoint_url(), "https://example.com/api/v1/availability/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the service, e.g. "https://example.com/api/v1"
    pub base_url: String,

    /// Static API key sent with every request
    pub api_key: String,

    /// Path of the text generation endpoint, appended to `base_url`
    pub endpoint_path: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub request_timeout: Option<u64>,
}

impl ApiConfig {
    /// Creates a configuration with the default endpoint path and no timeout
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_string(),
            request_timeout: None,
        }
    }

    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `TIMETEXT_API_KEY` is not set
    /// - `TIMETEXT_REQUEST_TIMEOUT_SECONDS` is set but not a whole number
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url =
            lookup("TIMETEXT_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = lookup("TIMETEXT_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| eyre!("TIMETEXT_API_KEY environment variable must be set"))?;

        let endpoint_path =
            lookup("TIMETEXT_ENDPOINT_PATH").unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string());

        let request_timeout = lookup("TIMETEXT_REQUEST_TIMEOUT_SECONDS")
            .map(|value| value.parse::<u64>())
            .transpose()
            .wrap_err("Invalid TIMETEXT_REQUEST_TIMEOUT_SECONDS value")?;

        Ok(Self {
            base_url,
            api_key,
            endpoint_path,
            request_timeout,
        })
    }

    /// Returns the full URL of the text generation endpoint
    ///
    /// Exactly one `/` separates the base URL from the endpoint path.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}
