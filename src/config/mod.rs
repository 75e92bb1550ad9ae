//! Configuration for bloat-report
//!
//! This module provides:
//! - .bloat-report.toml config file support
//! - Overrides from the CI environment (repository, API endpoints, token)

pub mod file;
pub mod loader;

pub use file::{ConfigFile, GitHubSettings, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;
