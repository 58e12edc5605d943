//! `download-all` entry point.
//!
//! Walks the configured version list and makes sure every documentation
//! archive is cached locally. Progress goes to stdout, logging to stderr.
//! The first error aborts the remaining versions.

use std::io::Write;

use anyhow::Result;
use pydocs_client::{DocsDownloader, FetchClient, FetchConfig, Fetcher};
use pydocs_core::{AppConfig, Version};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load()?;
    let versions = config.versions()?;
    tracing::debug!(root = %config.root.display(), versions = versions.len(), "loaded configuration");

    let client = FetchClient::new(FetchConfig::from(&config))?;
    let mut downloader = DocsDownloader::from_config(client, &config);

    run(&mut downloader, &versions, &mut std::io::stdout())
        .await
        .inspect_err(|e| tracing::error!("download run aborted: {e:#}"))
}

/// Process `versions` in order, printing one progress line each.
async fn run<F, W>(downloader: &mut DocsDownloader<F>, versions: &[Version], out: &mut W) -> Result<()>
where
    F: Fetcher,
    W: Write,
{
    for version in versions {
        writeln!(out, "processing {version}")?;
        downloader.ensure_archive(version).await?;
    }
    Ok(())
}
