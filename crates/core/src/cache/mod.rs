//! Two-level file cache for download pages and documentation archives.
//!
//! A cache entry is valid as soon as its file exists. Entries are never
//! refreshed, checksummed or removed:
//!
//! - Page cache: `<root>/.cache/downloads/{version}/download_page.html`
//! - Archive cache: `<root>/archive/{version}.zip`

pub mod files;
pub mod layout;

pub use files::{exists, read_text, write_creating_parents};
pub use layout::CacheLayout;
