//! Download page cache: in-process memo over the on-disk page cache.

use std::collections::HashMap;

use pydocs_core::cache::{self, CacheLayout};
use pydocs_core::{Error, Version};

use crate::fetch::{Fetcher, download_page_url};

/// Lazily populated `version -> page markup` map.
///
/// Lookup order is memo, then `<root>/.cache/downloads/{version}/download_page.html`,
/// then the network. Nothing is ever invalidated.
#[derive(Debug)]
pub struct PageCache {
    layout: CacheLayout,
    docs_base: String,
    pages: HashMap<Version, String>,
}

impl PageCache {
    pub fn new(layout: CacheLayout, docs_base: impl Into<String>) -> Self {
        Self { layout, docs_base: docs_base.into(), pages: HashMap::new() }
    }

    /// Page markup for `version`, fetching and persisting it on first use.
    pub async fn get<F>(&mut self, fetcher: &F, version: &Version) -> Result<&str, Error>
    where
        F: Fetcher + ?Sized,
    {
        if !self.pages.contains_key(version) {
            let page = self.load(fetcher, version).await?;
            self.pages.insert(version.clone(), page);
        }
        Ok(self.pages[version].as_str())
    }

    async fn load<F>(&self, fetcher: &F, version: &Version) -> Result<String, Error>
    where
        F: Fetcher + ?Sized,
    {
        let path = self.layout.page_path(version);

        if cache::exists(&path).await? {
            tracing::debug!("page cache hit for {} at {}", version, path.display());
        } else {
            let url = download_page_url(&self.docs_base, version);
            let response = fetcher.fetch(&url).await?;
            cache::write_creating_parents(&path, response.text().as_bytes()).await?;
        }

        cache::read_text(&path).await
    }
}
