//! Error types with contextual suggestions
//!
//! Provides structured error types that include:
//! - Actionable error messages
//! - Suggested fixes
//! - Documentation links
//! - Proper exit codes for CI/CD
//!
//! # Examples
//!
//! ```
//! use bloat_report::error::BloatReportError;
//!
//! let err = BloatReportError::MissingToken;
//! assert!(err.suggestion().unwrap().contains("GITHUB_TOKEN"));
//! assert_eq!(err.exit_code(), 78);
//! ```

use std::path::PathBuf;
use thiserror::Error;

use crate::github::GitHubError;

/// bloat-report errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BloatReportError {
    /// Snapshot file does not exist
    #[error("Snapshot file not found: {path}")]
    SnapshotsNotFound {
        /// Path to the snapshot file
        path: PathBuf,
    },

    /// Snapshot file is not valid snapshot JSON
    #[error("Invalid snapshot data in {path}")]
    InvalidSnapshots {
        /// Path to the snapshot file
        path: PathBuf,
        #[source]
        /// JSON error source
        source: serde_json::Error,
    },

    /// Snapshot file holds no snapshots
    #[error("No snapshots in {path}")]
    EmptySnapshots {
        /// Path to the snapshot file
        path: PathBuf,
    },

    /// API token not provided
    #[error("GitHub token not set")]
    MissingToken,

    /// Repository not configured
    #[error("Repository not configured")]
    MissingRepository,

    /// Repository not in `owner/repo` form
    #[error("Invalid repository: '{value}'")]
    InvalidRepository {
        /// Value that failed to parse
        value: String,
    },

    /// Toolchain label is blank
    #[error("Toolchain label must not be empty")]
    EmptyToolchain,

    /// Current commit not given and not detectable
    #[error("Could not determine the current commit")]
    MissingCommit,

    /// Configuration values failed validation
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong
        message: String,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },

    /// Issue tracker call failed
    #[error("{0}")]
    GitHub(#[from] GitHubError),
}

impl BloatReportError {
    /// Get actionable suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::SnapshotsNotFound { path } => Some(format!(
                "Run the size measurement step first so that {} exists",
                path.display()
            )),
            Self::InvalidSnapshots { source, .. } => Some(format!(
                "Expected a snapshot object or an array of them ({})",
                source
            )),
            Self::EmptySnapshots { .. } => {
                Some("Provide at least one snapshot to report on".to_string())
            }
            Self::MissingToken => Some(
                "Set GITHUB_TOKEN (e.g. `env: GITHUB_TOKEN: ${{ secrets.GITHUB_TOKEN }}`)"
                    .to_string(),
            ),
            Self::MissingRepository => Some(
                "Set GITHUB_REPOSITORY or add `repository = \"owner/repo\"` under [github] in .bloat-report.toml"
                    .to_string(),
            ),
            Self::InvalidRepository { .. } => {
                Some("Use the form owner/repo, e.g. rust-lang/cargo".to_string())
            }
            Self::EmptyToolchain => Some(
                "Pass the toolchain the snapshots were built with, e.g. --toolchain stable-x86_64-unknown-linux-gnu"
                    .to_string(),
            ),
            Self::MissingCommit => Some(
                "Pass --current <SHA> or run inside a git checkout".to_string(),
            ),
            Self::InvalidConfig { .. } => {
                Some("Fix the [github] section of .bloat-report.toml".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
            Self::GitHub(GitHubError::InvalidToken) => Some(
                "Check GITHUB_TOKEN for stray control characters such as an embedded newline"
                    .to_string(),
            ),
            Self::GitHub(e) if e.is_auth_failure() => Some(
                "The token was rejected; make sure the workflow grants `pull-requests: write`"
                    .to_string(),
            ),
            Self::GitHub(GitHubError::ListFailed { .. }) => {
                Some("No comment was posted; re-run the job once the API is reachable".to_string())
            }
            Self::GitHub(_) => Some("Check the GitHub API response above".to_string()),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::MissingToken | Self::GitHub(_) => Some(
                "https://docs.github.com/en/actions/security-for-github-actions/security-guides/automatic-token-authentication",
            ),
            _ => None,
        }
    }

    /// Get appropriate exit code for this error, following sysexits.h conventions.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SnapshotsNotFound { .. } => 66, // EX_NOINPUT
            Self::InvalidSnapshots { .. } => 65,  // EX_DATAERR
            Self::EmptySnapshots { .. } => 65,    // EX_DATAERR
            Self::MissingToken => 78,             // EX_CONFIG
            Self::MissingRepository => 78,        // EX_CONFIG
            Self::InvalidRepository { .. } => 78, // EX_CONFIG
            Self::EmptyToolchain => 64,           // EX_USAGE
            Self::MissingCommit => 64,            // EX_USAGE
            Self::InvalidConfig { .. } => 78,     // EX_CONFIG
            Self::Io { .. } => 74,                // EX_IOERR
            Self::GitHub(GitHubError::InvalidToken) => 78, // EX_CONFIG
            Self::GitHub(_) => 69,                // EX_UNAVAILABLE
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(report_error) = error.downcast_ref::<BloatReportError>() {
            if let Some(suggestion) = report_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = report_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(report_error) = error.downcast_ref::<BloatReportError>() {
            report_error.exit_code()
        } else {
            1
        }
    }
}
