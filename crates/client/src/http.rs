//! HTTP transport layer for the Hey Bible client.

use crate::config::ClientConfig;
use crate::error::{HeyBibleError, HeyBibleResult};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> HeyBibleResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| HeyBibleError::Config("Invalid API key format".to_string()))?,
        );

        let client = Client::builder()
            .user_agent("heybible-client/0.1.0")
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> HeyBibleResult<url::Url> {
        self.config
            .base_url
            .join(path)
            .map_err(HeyBibleError::InvalidUrl)
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> HeyBibleResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(HeyBibleError::from_response(status, &body));
        }

        let body = response.json().await?;
        Ok(body)
    }
}
