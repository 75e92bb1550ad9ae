//! Configuration file data structures

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".bloat-report.toml";

/// Default REST endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default web host for compare links
pub const DEFAULT_SERVER_URL: &str = "https://github.com";
/// Identity the CI workflow posts comments as
pub const DEFAULT_BOT_LOGIN: &str = "github-actions[bot]";

/// bloat-report configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// GitHub connection and comment settings
    #[serde(default)]
    pub github: GitHubSettings,
}

/// GitHub settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitHubSettings {
    /// REST API base URL
    #[serde(rename = "api-url", default = "default_api_url")]
    pub api_url: String,

    /// Web host used for compare links
    #[serde(rename = "server-url", default = "default_server_url")]
    pub server_url: String,

    /// Login of the account whose comments are considered ours
    #[serde(rename = "bot-login", default = "default_bot_login")]
    pub bot_login: String,

    /// Pages of 100 comments scanned when looking for an existing report
    #[serde(rename = "comment-pages", default = "default_comment_pages")]
    pub comment_pages: u32,

    /// Repository as `owner/repo`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_bot_login() -> String {
    DEFAULT_BOT_LOGIN.to_string()
}

fn default_comment_pages() -> u32 {
    1
}

impl Default for GitHubSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            server_url: default_server_url(),
            bot_login: default_bot_login(),
            comment_pages: default_comment_pages(),
            repository: None,
        }
    }
}

impl GitHubSettings {
    /// Validate settings
    ///
    /// # Examples
    ///
    /// ```
    /// use bloat_report::config::file::GitHubSettings;
    ///
    /// let mut settings = GitHubSettings::default();
    /// assert!(settings.validate().is_ok());
    ///
    /// settings.comment_pages = 0;
    /// assert!(settings.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.comment_pages == 0 {
            anyhow::bail!("comment-pages must be at least 1");
        }
        if self.bot_login.trim().is_empty() {
            anyhow::bail!("bot-login must not be empty");
        }
        for (key, url) in [("api-url", &self.api_url), ("server-url", &self.server_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", key, url);
            }
        }
        if let Some(repo) = &self.repository {
            if crate::github::RepoId::parse(repo).is_none() {
                anyhow::bail!("repository must be 'owner/repo', got '{}'", repo);
            }
        }
        Ok(())
    }
}
