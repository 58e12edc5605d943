//! URL building and canonicalization for download pages and archives.

use pydocs_core::Version;

/// Error type for URL canonicalization failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty URL")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// `{docs_base}/{version}/download.html`
pub fn download_page_url(docs_base: &str, version: &Version) -> String {
    format!("{}/{}/download.html", docs_base.trim_end_matches('/'), version)
}

/// Make an href found on a version's download page absolute.
///
/// Anything containing `//` (scheme-qualified or protocol-relative) is taken
/// as already absolute and returned untouched. Everything else is placed under
/// the version's documentation root, ignoring leading slashes.
pub fn normalize_archive_url(href: &str, docs_base: &str, version: &Version) -> String {
    if href.contains("//") {
        return href.to_string();
    }
    format!("{}/{}/{}", docs_base.trim_end_matches('/'), version, href.trim_start_matches('/'))
}

/// Canonicalize a URL string before it is requested.
///
/// Normalization steps:
/// 1. Trim leading/trailing whitespace
/// 2. Default scheme to https:// if missing (covers protocol-relative `//host/...`)
/// 3. Lowercase the host
/// 4. Remove fragment (#...)
/// 5. Keep query string intact (do not reorder)
pub fn canonicalize(input: &str) -> Result<url::Url, UrlError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url_str = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed.trim_start_matches('/'))
    };

    let mut parsed = url::Url::parse(&url_str).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }

    if let Some(host) = parsed.host_str() {
        let host = host.to_lowercase();
        parsed
            .set_host(Some(&host))
            .map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    }

    parsed.set_fragment(None);

    Ok(parsed)
}
