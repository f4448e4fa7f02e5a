//! Configuration types for the Hey Bible client.

use crate::error::{HeyBibleError, HeyBibleResult};
use std::time::Duration;
use url::Url;

/// Environment variable holding the API credential. Required.
pub const API_KEY_ENV: &str = "HEY_BIBLE_API_KEY";

/// Environment variable overriding the API base URL. Optional.
pub const BASE_URL_ENV: &str = "HEY_BIBLE_API_URL";

/// Default base URL of the Hey Bible API.
pub const DEFAULT_BASE_URL: &str = "https://api.heybible.com";

/// Configuration for the Hey Bible client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Hey Bible API.
    pub base_url: Url,
    /// API key for authentication.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL and API key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Fails with [`HeyBibleError::MissingApiKey`] when `HEY_BIBLE_API_KEY`
    /// is unset. `HEY_BIBLE_API_URL` optionally overrides the default base
    /// URL.
    pub fn from_env() -> HeyBibleResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| HeyBibleError::MissingApiKey)?;

        let base_url = match std::env::var(BASE_URL_ENV) {
            Ok(raw) => Url::parse(&raw)?,
            Err(_) => Url::parse(DEFAULT_BASE_URL)?,
        };

        Ok(Self::new(base_url, api_key))
    }
}
