//! Main client for the Hey Bible API.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::{HeyBibleError, HeyBibleResult};
use crate::http::HttpTransport;
use crate::types::{GetParams, Resource};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// The three read operations of the Hey Bible API.
///
/// Implemented by [`HeyBibleClient`]; trait objects let callers substitute a
/// test double for the remote service. Responses are relayed as raw JSON so
/// nothing the API returns is dropped.
#[async_trait::async_trait]
pub trait BibleApi: Send + Sync {
    /// Fetch saved verses, or a single verse when `id` is set.
    async fn verses_get(&self, params: &GetParams) -> HeyBibleResult<Value>;

    /// Fetch notes, or a single note when `id` is set.
    async fn notes_get(&self, params: &GetParams) -> HeyBibleResult<Value>;

    /// Fetch AI-generated images, or a single image when `id` is set. The
    /// single-image response carries a signed URL valid for 24 hours.
    async fn images_get(&self, params: &GetParams) -> HeyBibleResult<Value>;
}

/// Client for the Hey Bible API.
#[derive(Clone)]
pub struct HeyBibleClient {
    http: HttpTransport,
}

impl HeyBibleClient {
    /// Create a client builder.
    pub fn builder() -> HeyBibleClientBuilder {
        HeyBibleClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn new(config: ClientConfig) -> HeyBibleResult<Self> {
        let http = HttpTransport::new(Arc::new(config))?;
        Ok(Self { http })
    }

    async fn get_resource(&self, resource: Resource, params: &GetParams) -> HeyBibleResult<Value> {
        self.http.get_with_query(resource.path(), params).await
    }
}

#[async_trait::async_trait]
impl BibleApi for HeyBibleClient {
    async fn verses_get(&self, params: &GetParams) -> HeyBibleResult<Value> {
        self.get_resource(Resource::Verses, params).await
    }

    async fn notes_get(&self, params: &GetParams) -> HeyBibleResult<Value> {
        self.get_resource(Resource::Notes, params).await
    }

    async fn images_get(&self, params: &GetParams) -> HeyBibleResult<Value> {
        self.get_resource(Resource::Images, params).await
    }
}

/// Builder for creating a [`HeyBibleClient`].
pub struct HeyBibleClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl HeyBibleClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the base URL of the Hey Bible API. Defaults to the public API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> HeyBibleResult<HeyBibleClient> {
        let api_key = self
            .api_key
            .ok_or_else(|| HeyBibleError::Config("api_key is required".to_string()))?;

        let base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;

        let mut config = ClientConfig::new(base_url, api_key);
        config.timeout = self.timeout;

        HeyBibleClient::new(config)
    }
}

impl Default for HeyBibleClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
