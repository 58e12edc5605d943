//! Deterministic cache paths derived from a version identifier.

use std::path::{Path, PathBuf};

use crate::version::Version;

const PAGE_CACHE_DIR: &str = ".cache/downloads";
const PAGE_FILE_NAME: &str = "download_page.html";
const ARCHIVE_DIR: &str = "archive";

/// Maps versions to their page and archive cache files under a root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/.cache/downloads/{version}/download_page.html`
    pub fn page_path(&self, version: &Version) -> PathBuf {
        self.root.join(PAGE_CACHE_DIR).join(version.as_str()).join(PAGE_FILE_NAME)
    }

    /// `<root>/archive/{version}.zip`
    pub fn archive_path(&self, version: &Version) -> PathBuf {
        self.root.join(ARCHIVE_DIR).join(format!("{version}.zip"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_page_path() {
        let layout = CacheLayout::new("/repo");
        assert_eq!(layout.page_path(&v("3.9")), PathBuf::from("/repo/.cache/downloads/3.9/download_page.html"));
    }

    #[test]
    fn test_archive_path() {
        let layout = CacheLayout::new("/repo");
        assert_eq!(layout.archive_path(&v("2.7")), PathBuf::from("/repo/archive/2.7.zip"));
    }

    #[test]
    fn test_paths_depend_only_on_version() {
        let a = CacheLayout::new("/repo");
        let b = CacheLayout::new("/repo");
        for version in Version::all() {
            assert_eq!(a.page_path(&version), b.page_path(&version));
            assert_eq!(a.archive_path(&version), b.archive_path(&version));
        }
    }

    #[test]
    fn test_paths_distinct_per_version() {
        let layout = CacheLayout::new("/repo");
        let pages: std::collections::HashSet<_> = Version::all().iter().map(|v| layout.page_path(v)).collect();
        let archives: std::collections::HashSet<_> = Version::all().iter().map(|v| layout.archive_path(v)).collect();
        assert_eq!(pages.len(), Version::all().len());
        assert_eq!(archives.len(), Version::all().len());
    }

    #[test]
    fn test_paths_stay_under_root() {
        let layout = CacheLayout::new("/repo");
        for version in Version::all() {
            assert!(layout.page_path(&version).starts_with(layout.root()));
            assert!(layout.archive_path(&version).starts_with(layout.root()));
        }
    }
}
