//! HTTP fetch pipeline for download pages and archives.
//!
//! ### URL Canonicalization
//! - Trim whitespace, ensure scheme (default: `https`)
//! - Lowercase host, remove fragments
//! - Preserve query string
//!
//! ### Failure Policy
//! - A non-success status is returned as `Error::HttpError` immediately.
//! - No retries and no backoff; the caller aborts the run.
//! - No request deadline unless one is configured.

pub mod url;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use reqwest::{Client, StatusCode, header};
use std::time::{Duration, Instant};

pub use url::{UrlError, canonicalize, download_page_url, normalize_archive_url};

use pydocs_core::{AppConfig, Error};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string (default: "pydocs-archive/0.1")
    pub user_agent: String,

    /// Whole-request timeout, body included (default: none)
    pub timeout: Option<Duration>,

    /// Maximum number of redirects to follow (default: 10)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { user_agent: "pydocs-archive/0.1".to_string(), timeout: None, max_redirects: 10 }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self { user_agent: config.user_agent.clone(), timeout: config.timeout(), ..Default::default() }
    }
}

/// Response from a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The original URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header
    pub content_type: Option<String>,
    /// Response body bytes
    pub bytes: Bytes,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

impl FetchResponse {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Network seam for the download pipeline.
///
/// Implementations must return `Err` for any non-success status.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchResponse, Error>;
}

/// reqwest-backed HTTP client.
pub struct FetchClient {
    http: Client,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Fetcher for FetchClient {
    /// Fetch a URL, returning raw bytes and metadata.
    async fn fetch(&self, url_str: &str) -> Result<FetchResponse, Error> {
        let start = Instant::now();
        let url = canonicalize(url_str).map_err(|e| Error::InvalidUrl(format!("{url_str}: {e}")))?;

        let response = self
            .http
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() { "timed out" } else { "network error" };
                Error::HttpError(format!("{} for {}: {}", kind, url, e))
            })?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpError(format!("status {} for {}", status.as_u16(), url)));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::HttpError(format!("failed to read response from {}: {}", url, e)))?;

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "fetched {} -> {} in {}ms ({} bytes)",
            url,
            final_url,
            fetch_ms,
            bytes.len()
        );

        Ok(FetchResponse { url, final_url, status, content_type, bytes, fetch_ms })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.user_agent, "pydocs-archive/0.1");
        assert_eq!(config.timeout, None);
        assert_eq!(config.max_redirects, 10);
    }

    #[test]
    fn test_fetch_config_from_app_config() {
        let app = AppConfig { user_agent: "tester/1".into(), timeout_ms: Some(1500), ..Default::default() };
        let config = FetchConfig::from(&app);
        assert_eq!(config.user_agent, "tester/1");
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));

        let config = FetchConfig::from(&AppConfig::default());
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_fetch_response_text_lossy() {
        let response = FetchResponse {
            url: Url::parse("https://docs.python.org/3.9/download.html").unwrap(),
            final_url: Url::parse("https://docs.python.org/3.9/download.html").unwrap(),
            status: StatusCode::OK,
            content_type: Some("text/html".to_string()),
            bytes: Bytes::from_static(b"<p>caf\xff</p>"),
            fetch_ms: 3,
        };
        assert_eq!(response.text(), "<p>caf\u{fffd}</p>");
    }

    #[tokio::test]
    async fn test_fetch_client_new() {
        let client = FetchClient::new(FetchConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_rejects_bad_scheme() {
        let client = FetchClient::new(FetchConfig::default()).unwrap();
        let result = client.fetch("ftp://docs.python.org/3.9/archive.zip").await;
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }
}
