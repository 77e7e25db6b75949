//! # catalog-fetch
//!
//! Fetches the published product catalog (`/urunler.json`) and returns its
//! product records.
//!
//! ## Features
//!
//! - **Fresh reads**: every request bypasses intermediate caches
//! - **Lenient envelope**: a missing or falsy `products` field yields an empty collection
//! - **Opaque records**: products are returned exactly as published, in order
//! - **Optional status check**: non-success statuses can be surfaced as errors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_fetch::{ProductFetcher, ProductSource, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let fetcher = ProductFetcher::for_origin("https://shop.example.com")?;
//!     let products = fetcher.fetch_products().await?;
//!     println!("{} products", products.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │        ProductFetcher::fetch_products()          │
//! └──────────────────────────────────────────────────┘
//!            │                         │
//! ┌──────────┴──────────┐   ┌──────────┴──────────┐
//! │        HTTP         │   │       Decode        │
//! ├─────────────────────┤   ├─────────────────────┤
//! │ GET /urunler.json   │   │ JSON parse          │
//! │ Cache bypass        │   │ products || []      │
//! │ Status policy       │   │                     │
//! └─────────────────────┘   └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Fetcher configuration
pub mod config;

/// HTTP client
pub mod http;

/// Envelope decoding
pub mod decode;

/// Product fetcher
pub mod catalog;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{fetch_products, CatalogProduct, ProductFetcher, ProductSource, ResponseEnvelope};
pub use config::FetcherConfig;
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
