//! Per-version download pipeline.
//!
//! For one version: fetch-or-load the download page, extract the archive
//! link, fetch-or-skip the archive. Each cache entry moves from absent to
//! present exactly once and an existing file is never re-fetched, even when
//! empty.

pub mod page;

pub use page::PageCache;

use std::path::PathBuf;

use pydocs_core::cache::{self, CacheLayout};
use pydocs_core::{AppConfig, Error, Version};

use crate::extract::{DEFAULT_QUERY, DocLinks, extract_doc_links};
use crate::fetch::Fetcher;

/// What `ensure_archive` did for a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveOutcome {
    /// The archive file was already present; nothing was fetched.
    Cached { path: PathBuf },
    /// The archive was fetched from `url` and written to `path`.
    Downloaded { url: String, path: PathBuf, bytes: usize },
}

/// Downloads documentation archives through a [`Fetcher`], caching pages and archives on disk.
pub struct DocsDownloader<F> {
    fetcher: F,
    layout: CacheLayout,
    docs_base: String,
    query: String,
    pages: PageCache,
}

impl<F: Fetcher> DocsDownloader<F> {
    pub fn new(fetcher: F, layout: CacheLayout, docs_base: impl Into<String>) -> Self {
        let docs_base = docs_base.into();
        let pages = PageCache::new(layout.clone(), docs_base.clone());
        Self { fetcher, layout, docs_base, query: DEFAULT_QUERY.to_string(), pages }
    }

    pub fn from_config(fetcher: F, config: &AppConfig) -> Self {
        Self::new(fetcher, config.layout(), config.docs_base.clone()).with_query(config.query.clone())
    }

    /// Override the row label searched for on the download page.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn layout(&self) -> &CacheLayout {
        &self.layout
    }

    /// Download page markup for `version`.
    pub async fn page(&mut self, version: &Version) -> Result<&str, Error> {
        self.pages.get(&self.fetcher, version).await
    }

    /// Archive and secondary-format links for `version`.
    pub async fn download_links(&mut self, version: &Version) -> Result<DocLinks, Error> {
        let page = self.pages.get(&self.fetcher, version).await?;
        extract_doc_links(page, &self.query, &self.docs_base, version)
    }

    /// Make sure `<root>/archive/{version}.zip` exists, downloading it if absent.
    pub async fn ensure_archive(&mut self, version: &Version) -> Result<ArchiveOutcome, Error> {
        let path = self.layout.archive_path(version);

        if cache::exists(&path).await? {
            tracing::debug!("archive for {} already at {}", version, path.display());
            return Ok(ArchiveOutcome::Cached { path });
        }

        let links = self.download_links(version).await?;
        let response = self.fetcher.fetch(&links.archive).await?;
        cache::write_creating_parents(&path, &response.bytes).await?;

        tracing::info!(%version, url = %links.archive, bytes = response.bytes.len(), "saved {}", path.display());

        Ok(ArchiveOutcome::Downloaded { url: links.archive, path, bytes: response.bytes.len() })
    }
}
