//! Unified error types for pydocs-archive.
//!
//! Every failure aborts the run, so variants carry enough context (page or
//! table markup, offending path) to diagnose the failure from the message alone.

use std::path::PathBuf;

/// Unified error type for the download pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Version identifier is not a `MAJOR.MINOR` label.
    #[error("INVALID_VERSION: {0:?}")]
    InvalidVersion(String),

    /// URL could not be built or parsed.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// Transport failure or non-success HTTP status.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// The page does not contain exactly one documentation table.
    #[error("AMBIGUOUS_TABLE: ambiguous number ({count}) of `table.docutils` in \n{html}")]
    AmbiguousTable { count: usize, html: String },

    /// No table row label contains the query.
    #[error("QUERY_NOT_FOUND: {query} not found in {table}")]
    QueryNotFound { query: String, table: String },

    /// The matching row holds fewer than two links.
    #[error("MISSING_LINKS: expected 2 links in row {row:?}, found {found}")]
    MissingLinks { row: String, found: usize },

    /// Cache file could not be read or written.
    #[error("IO_ERROR: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an IO error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
