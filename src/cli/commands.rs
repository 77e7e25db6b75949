//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch the published product catalog
#[derive(Parser, Debug)]
#[command(name = "catalog-fetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Origin to fetch from (overrides config and CATALOG_BASE_URL)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Fail on non-success HTTP statuses instead of decoding the body
    #[arg(long, global = true)]
    pub strict_status: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print the product records
    Fetch {
        /// Print at most this many records
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the record count and publish time of the catalog
    Show,

    /// Serve a catalog file at the resource path
    Serve {
        /// Catalog document to publish
        #[arg(long)]
        file: PathBuf,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
