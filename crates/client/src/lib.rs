//! Client code for pydocs-archive.
//!
//! This crate provides the HTTP fetch pipeline, download-page link extraction,
//! and the cached per-version download pipeline used by the CLI.

pub mod download;
pub mod extract;
pub mod fetch;

pub use download::{ArchiveOutcome, DocsDownloader, PageCache};
pub use extract::{DEFAULT_QUERY, DocLinks, extract_doc_links, find_row_hrefs};

pub use fetch::{FetchClient, FetchConfig, FetchResponse, Fetcher};
