//! HTTP client for catalog requests
//!
//! A thin wrapper over reqwest that handles:
//! - Resolving resource paths against a base origin
//! - Carrying the cache mode as request headers
//! - Optional status checking before the body is handed back

use crate::error::{Error, Result};
use crate::types::{CacheMode, StatusPolicy, StringMap};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Origin that relative resource paths resolve against
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers for all requests
    pub default_headers: StringMap,
    /// User agent string
    pub user_agent: String,
    /// Cache mode applied to every request
    pub cache_mode: CacheMode,
    /// Handling of non-success statuses
    pub status_policy: StatusPolicy,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            default_headers: StringMap::new(),
            user_agent: format!("catalog-fetch/{}", env!("CARGO_PKG_VERSION")),
            cache_mode: CacheMode::Bypass,
            status_policy: StatusPolicy::Ignore,
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the default cache mode
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.config.cache_mode = mode;
        self
    }

    /// Set the status policy
    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.status_policy = policy;
        self
    }

    /// Shorthand for `status_policy(StatusPolicy::Strict)`
    pub fn strict_status(self) -> Self {
        self.status_policy(StatusPolicy::Strict)
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client used by the product fetcher
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.build_url(path)?;
        let cache_mode = self.config.cache_mode;

        debug!("GET {} (cache: {:?})", url, cache_mode);
        let response = self
            .client
            .get(url.clone())
            .headers(self.request_headers()?)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            match self.config.status_policy {
                StatusPolicy::Strict => {
                    return Err(status_error(status.as_u16(), response.text().await));
                }
                StatusPolicy::Ignore => {
                    warn!("GET {} returned {}, decoding body anyway", url, status);
                }
            }
        }

        Ok(response)
    }

    /// Configured headers, then the cache mode headers replacing any
    /// configured value under the same name
    pub(super) fn request_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.config.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::invalid_value("headers", format!("{key}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_value("headers", format!("{key}: {e}")))?;
            headers.insert(name, value);
        }

        for (key, value) in self.config.cache_mode.headers() {
            headers.insert(*key, HeaderValue::from_static(value));
        }

        Ok(headers)
    }

    /// Resolve a path against the base URL.
    ///
    /// Absolute URLs pass through. Relative paths follow URL reference
    /// resolution, so `/urunler.json` lands at the root of the base origin.
    pub fn build_url(&self, path: &str) -> Result<Url> {
        if let Ok(url) = Url::parse(path) {
            return Ok(url);
        }

        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| Error::missing_field("base_url"))?;

        Ok(Url::parse(base)?.join(path)?)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Status error carrying the response body, or why it could not be read
pub(super) fn status_error<E: std::fmt::Display>(
    status: u16,
    body: std::result::Result<String, E>,
) -> Error {
    let body = body.unwrap_or_else(|e| format!("<body unavailable: {e}>"));
    Error::http_status(status, body)
}
