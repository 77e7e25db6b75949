//! Product catalog module
//!
//! Fetches the published catalog document and hands back its product records.
//!
//! # Overview
//!
//! A call is one linear sequence: send the GET (cache bypassed), read the
//! body, parse it, project out `products`. Nothing is shared between calls,
//! so concurrent calls never see each other's results.

mod fetcher;
mod types;

pub use fetcher::{fetch_products, ProductFetcher, ProductSource};
pub use types::{catalog_view, CatalogProduct, ResponseEnvelope};
