//! GitHub API error types.
//!
//! Listing failures end the run before anything is posted. Create and
//! update failures are surfaced as-is; nothing is retried.

use thiserror::Error;

use super::api::{CommentId, IssueNumber};

/// Errors from the issue comment API
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Listing comments returned a non-success status
    #[error("Failed to list comments on issue {issue}: HTTP {status}")]
    ListFailed {
        /// Issue whose comments were requested
        issue: IssueNumber,
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Creating a comment returned a non-success status
    #[error("Failed to create comment on issue {issue}: HTTP {status}")]
    CreateFailed {
        /// Target issue
        issue: IssueNumber,
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Updating a comment returned a non-success status
    #[error("Failed to update comment {comment}: HTTP {status}")]
    UpdateFailed {
        /// Comment being updated
        comment: CommentId,
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Token cannot be sent as an HTTP header value
    #[error("GitHub token contains characters not allowed in an HTTP header")]
    InvalidToken,

    /// Transport or decoding failure
    #[error("GitHub request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl GitHubError {
    /// HTTP status code, if the API answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ListFailed { status, .. }
            | Self::CreateFailed { status, .. }
            | Self::UpdateFailed { status, .. } => Some(*status),
            Self::InvalidToken => None,
            Self::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Whether the token was rejected or lacks permission
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
