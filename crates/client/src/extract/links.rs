//! The archive link pair found on a download page.

use pydocs_core::Version;

use crate::fetch::normalize_archive_url;

/// Absolute URLs of a version's documentation archives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLinks {
    /// Primary archive (`.zip`)
    pub archive: String,
    /// Secondary-format archive (usually `.tar.bz2`)
    pub secondary: String,
}

impl DocLinks {
    /// Build the pair from hrefs as written in the page.
    pub fn resolve(archive: &str, secondary: &str, docs_base: &str, version: &Version) -> Self {
        Self {
            archive: normalize_archive_url(archive, docs_base, version),
            secondary: normalize_archive_url(secondary, docs_base, version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_pair() {
        let version = Version::parse("3.9").unwrap();
        let links = DocLinks::resolve("archive.zip", "archive.tar.bz2", "https://docs.python.org", &version);
        assert_eq!(
            links,
            DocLinks {
                archive: "https://docs.python.org/3.9/archive.zip".into(),
                secondary: "https://docs.python.org/3.9/archive.tar.bz2".into(),
            }
        );
    }

    #[test]
    fn test_resolve_mixed_pair() {
        let version = Version::parse("3.0").unwrap();
        let links = DocLinks::resolve(
            "http://mirror.example/3.0.zip",
            "/archives/3.0.tar.bz2",
            "https://docs.python.org/",
            &version,
        );
        assert_eq!(links.archive, "http://mirror.example/3.0.zip");
        assert_eq!(links.secondary, "https://docs.python.org/3.0/archives/3.0.tar.bz2");
    }
}
