//! Application configuration with layered loading.
//!
//! Uses figment to merge, lowest to highest precedence:
//!
//! 1. Built-in defaults (the behavior of a bare `download-all` run)
//! 2. TOML config file (if PYDOCS_CONFIG_FILE set)
//! 3. Environment variables (PYDOCS_*)

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cache::CacheLayout;
use crate::version::{ALL_VERSIONS, Version};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Repository root that `.cache/` and `archive/` hang off.
    ///
    /// Defaults to the workspace root this program was built from, so the
    /// cache does not move with the working directory.
    /// Set via PYDOCS_ROOT environment variable.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Documentation host base URL, without the version segment.
    ///
    /// Set via PYDOCS_DOCS_BASE environment variable.
    #[serde(default = "default_docs_base")]
    pub docs_base: String,

    /// Versions to process, in order.
    ///
    /// Set via PYDOCS_VERSIONS, e.g. `PYDOCS_VERSIONS='["3.8","3.9"]'`.
    #[serde(default = "default_versions")]
    pub versions: Vec<String>,

    /// Row label substring selecting the archive row on the download page.
    ///
    /// Set via PYDOCS_QUERY environment variable.
    #[serde(default = "default_query")]
    pub query: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via PYDOCS_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Optional whole-request timeout in milliseconds. Unset means requests
    /// may take as long as the transfer needs.
    ///
    /// Set via PYDOCS_TIMEOUT_MS environment variable.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// `crates/core/../..`, the workspace root.
fn default_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir).to_path_buf()
}

fn default_docs_base() -> String {
    "https://docs.python.org".into()
}

fn default_versions() -> Vec<String> {
    ALL_VERSIONS.iter().map(|v| v.to_string()).collect()
}

fn default_query() -> String {
    "html".into()
}

fn default_user_agent() -> String {
    "pydocs-archive/0.1".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            docs_base: default_docs_base(),
            versions: default_versions(),
            query: default_query(),
            user_agent: default_user_agent(),
            timeout_ms: None,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Parsed version list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` on the first entry that is not a `MAJOR.MINOR` label.
    pub fn versions(&self) -> Result<Vec<Version>, ConfigError> {
        self.versions
            .iter()
            .map(|v| {
                Version::parse(v).map_err(|e| ConfigError::Invalid { field: "versions".into(), reason: e.to_string() })
            })
            .collect()
    }

    /// Cache layout rooted at `root`.
    pub fn layout(&self) -> CacheLayout {
        CacheLayout::new(&self.root)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("PYDOCS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("PYDOCS_").ignore(&["config_file"]));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
