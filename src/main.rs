//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `favicon_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Concurrent resolution of every requested site
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use futures::stream::{self, StreamExt};
use std::process;

use favicon_resolver::app::{collect_sites, format_result, print_probe_statistics};
use favicon_resolver::initialization::{init_client, init_logger_with};
use favicon_resolver::{Config, FaviconResolver};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = run(config).await {
        eprintln!("favicon_resolver error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}

async fn run(config: Config) -> Result<()> {
    let sites = collect_sites(&config).await?;
    if sites.is_empty() {
        anyhow::bail!("No sites given; pass URLs as arguments or use --file");
    }

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let resolver = FaviconResolver::with_client(client);
    log::debug!(
        "Resolving {} site(s), {} at a time",
        sites.len(),
        config.max_concurrency
    );

    // `buffered` keeps results in input order
    let mut results = stream::iter(sites)
        .map(|site| {
            let resolver = resolver.clone();
            async move {
                let icon = resolver.resolve_str(&site).await;
                (site, icon)
            }
        })
        .buffered(config.max_concurrency.max(1));

    while let Some((site, icon)) = results.next().await {
        println!("{}", format_result(&site, &icon, &config.output));
    }

    if config.show_stats {
        print_probe_statistics(resolver.stats());
    }

    Ok(())
}
