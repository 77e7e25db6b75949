//! CLI module
//!
//! Command-line interface for the catalog fetcher.
//!
//! # Commands
//!
//! - `fetch` - Fetch and print the product records
//! - `show` - Print record count and publish time
//! - `serve` - Publish a catalog file over HTTP

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, serve_on, ServerConfig};
