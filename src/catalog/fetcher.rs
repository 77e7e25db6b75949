//! Product fetcher
//!
//! One GET for the catalog resource, one body read, one projection.

use super::types::ResponseEnvelope;
use crate::config::FetcherConfig;
use crate::decode::{EnvelopeDecoder, RecordDecoder};
use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{JsonValue, ProductCollection};
use async_trait::async_trait;
use tracing::{debug, info};

/// Anything that can produce the product collection
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the current products, empty when the catalog has none
    async fn fetch_products(&self) -> Result<ProductCollection>;

    /// Fetch the products together with the envelope metadata
    async fn fetch_envelope(&self) -> Result<ResponseEnvelope>;
}

/// Fetches the published catalog over HTTP.
///
/// Holds no state between calls; every call issues a fresh request with the
/// client's cache mode (bypass unless configured otherwise).
#[derive(Debug, Clone)]
pub struct ProductFetcher {
    client: HttpClient,
    resource_path: String,
    decoder: EnvelopeDecoder,
}

impl ProductFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        let client = HttpClient::with_config(config.http_config())?;
        Ok(Self::with_client(client, config.resource_path.clone())
            .with_decoder(EnvelopeDecoder::with_field(config.records_field.clone())))
    }

    /// Build a fetcher for `/urunler.json` on the given origin
    pub fn for_origin(base_url: impl Into<String>) -> Result<Self> {
        let config = FetcherConfig {
            base_url: base_url.into(),
            ..FetcherConfig::default()
        };
        Self::new(&config)
    }

    /// Build a fetcher over an existing client
    pub fn with_client(client: HttpClient, resource_path: impl Into<String>) -> Self {
        Self {
            client,
            resource_path: resource_path.into(),
            decoder: EnvelopeDecoder::new(),
        }
    }

    /// Replace the envelope decoder
    #[must_use]
    pub fn with_decoder(mut self, decoder: EnvelopeDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    /// Resource path requested on every call
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    async fn fetch_document(&self) -> Result<JsonValue> {
        let response = self.client.get(&self.resource_path).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(
            "Fetched {} ({}, {} bytes)",
            self.resource_path,
            status,
            body.len()
        );
        self.decoder.decode_raw(&body)
    }
}

#[async_trait]
impl ProductSource for ProductFetcher {
    async fn fetch_products(&self) -> Result<ProductCollection> {
        let document = self.fetch_document().await?;
        let products = self.decoder.extract(&document);
        info!("Fetched {} products from {}", products.len(), self.resource_path);
        Ok(products)
    }

    async fn fetch_envelope(&self) -> Result<ResponseEnvelope> {
        let document = self.fetch_document().await?;
        let products = self.decoder.extract(&document);
        Ok(ResponseEnvelope::from_document(products, &document))
    }
}

/// Fetch the products published at `base_url` with default settings
pub async fn fetch_products(base_url: &str) -> Result<ProductCollection> {
    ProductFetcher::for_origin(base_url)?.fetch_products().await
}
