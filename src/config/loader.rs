//! Configuration file loading and environment overrides

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::error::BloatReportError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Environment variable overriding the REST endpoint
pub const API_URL_ENV: &str = "GITHUB_API_URL";
/// Environment variable overriding the web host
pub const SERVER_URL_ENV: &str = "GITHUB_SERVER_URL";
/// Environment variable naming the repository (`owner/repo`)
pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
/// Environment variable overriding the bot identity
pub const BOT_LOGIN_ENV: &str = "BLOAT_REPORT_BOT_LOGIN";

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `.bloat-report.toml` from the given directory and apply
    /// overrides from the process environment
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bloat_report::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Posting as {}", config.github.bot_login);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with(project_root, &RealFileSystem, |key| std::env::var(key).ok())
    }

    /// Load config with a custom filesystem and environment lookup
    pub fn load_with<FS, E>(project_root: &Path, fs: &FS, env: E) -> Result<ConfigFile>
    where
        FS: FileSystem,
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Self::read_file(project_root, fs)?;
        Self::apply_env(&mut config, env);

        config
            .github
            .validate()
            .map_err(|e| BloatReportError::InvalidConfig {
                message: e.to_string(),
            })?;

        Ok(config)
    }

    fn read_file<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .bloat-report.toml");
            }
        };

        toml_edit::de::from_str(&contents).context("Failed to parse .bloat-report.toml")
    }

    /// Overlay values from the CI environment; blank values are ignored
    pub fn apply_env<E>(config: &mut ConfigFile, env: E)
    where
        E: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup(API_URL_ENV) {
            config.github.api_url = url;
        }
        if let Some(url) = lookup(SERVER_URL_ENV) {
            config.github.server_url = url;
        }
        if let Some(repo) = lookup(REPOSITORY_ENV) {
            config.github.repository = Some(repo);
        }
        if let Some(login) = lookup(BOT_LOGIN_ENV) {
            config.github.bot_login = login;
        }
    }

    /// Read the API token from the environment
    pub fn token<E>(env: E) -> Result<String, BloatReportError>
    where
        E: Fn(&str) -> Option<String>,
    {
        env(TOKEN_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(BloatReportError::MissingToken)
    }
}
