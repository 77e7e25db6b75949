//! HTTP client module
//!
//! Provides the single-request client the product fetcher is built on.
//!
//! # Features
//!
//! - **Base URL resolution**: relative resource paths join onto a configured origin
//! - **Cache bypass**: `CacheMode::Bypass` forces a fresh retrieval
//! - **Status policy**: opt-in failure on non-success statuses

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
