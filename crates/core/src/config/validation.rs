//! Configuration validation rules.
//!
//! Applied to `AppConfig` after it has been merged from environment, file and
//! defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `docs_base` is not an http(s) URL
    /// - `versions` is empty or holds a malformed label
    /// - `query` or `user_agent` is empty
    /// - `timeout_ms` is set below 100ms
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.docs_base) {
            Ok(u) if matches!(u.scheme(), "http" | "https") => {}
            Ok(u) => {
                return Err(ConfigError::Invalid {
                    field: "docs_base".into(),
                    reason: format!("unsupported scheme: {}", u.scheme()),
                });
            }
            Err(e) => return Err(ConfigError::Invalid { field: "docs_base".into(), reason: e.to_string() }),
        }

        if self.versions.is_empty() {
            return Err(ConfigError::Invalid { field: "versions".into(), reason: "must not be empty".into() });
        }
        self.versions()?;

        if self.query.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "query".into(), reason: "must not be empty".into() });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if let Some(timeout_ms) = self.timeout_ms
            && timeout_ms < 100
        {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }

        if self.query != self.query.to_lowercase() {
            tracing::warn!(query = %self.query, "query has uppercase characters; row labels are case-folded before matching");
        }

        Ok(())
    }
}
