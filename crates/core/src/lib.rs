//! Core types and shared functionality for pydocs-archive.
//!
//! This crate provides:
//! - Documentation version identifiers
//! - File cache layout and IO helpers
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod error;
pub mod version;

pub use cache::CacheLayout;
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use version::{ALL_VERSIONS, Version};
