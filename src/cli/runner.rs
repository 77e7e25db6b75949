//! CLI runner - executes commands

use crate::catalog::{catalog_view, ProductFetcher, ProductSource, ResponseEnvelope};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::FetcherConfig;
use crate::error::Result;
use crate::types::{ProductRecord, StatusPolicy};
use serde_json::{json, Value};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch { limit } => self.fetch(*limit).await,
            Commands::Show => self.show().await,
            Commands::Serve { file, port } => {
                let config = crate::cli::ServerConfig {
                    catalog_file: file.clone(),
                    resource_path: self.load_config()?.resource_path,
                };
                crate::cli::serve(config, *port).await
            }
        }
    }

    /// Resolve configuration: file, then environment, then flags
    pub fn load_config(&self) -> Result<FetcherConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FetcherConfig::load(path)?,
            None => FetcherConfig::default(),
        }
        .apply_env();

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }

        if self.cli.strict_status {
            config.status_policy = StatusPolicy::Strict;
        }

        Ok(config)
    }

    fn fetcher(&self) -> Result<ProductFetcher> {
        let config = self.load_config()?;
        config.validate()?;
        ProductFetcher::new(&config)
    }

    async fn fetch(&self, limit: Option<usize>) -> Result<()> {
        let fetcher = self.fetcher()?;
        let products = fetcher.fetch_products().await?;

        for line in fetch_lines(products, limit, self.cli.format) {
            println!("{line}");
        }

        Ok(())
    }

    async fn show(&self) -> Result<()> {
        let fetcher = self.fetcher()?;
        let envelope = fetcher.fetch_envelope().await?;
        self.output_message(&summary(&envelope));
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Count and publish time of a fetched catalog
fn summary(envelope: &ResponseEnvelope) -> Value {
    json!({
        "count": envelope.len(),
        "updatedAt": envelope.updated_at.map(|t| t.to_rfc3339()),
    })
}

/// Output lines for `fetch`: the first `limit` products, one JSON document
/// per line or the pretty table
fn fetch_lines(
    mut products: Vec<ProductRecord>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Vec<String> {
    if let Some(limit) = limit {
        products.truncate(limit);
    }

    match format {
        OutputFormat::Json => products
            .iter()
            .map(|p| serde_json::to_string(p).unwrap_or_default())
            .collect(),
        OutputFormat::Pretty => pretty_lines(&products),
    }
}

/// One line per product that fits the catalog view; the rest are counted
fn pretty_lines(products: &[ProductRecord]) -> Vec<String> {
    let view = catalog_view(products);
    let mut lines: Vec<String> = view
        .iter()
        .map(|p| {
            format!(
                "{:<12} {:<20} {:<40} {:>10.2} {:>5}",
                p.id.as_deref().unwrap_or("-"),
                p.brand,
                p.title,
                p.effective_price(),
                p.quantity
            )
        })
        .collect();

    let skipped = products.len() - view.len();
    if skipped > 0 {
        lines.push(format!("({skipped} records not shown)"));
    }
    lines
}
