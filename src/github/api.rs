//! Issue comment API seam
//!
//! `CommentApi` is the only thing the upsert logic knows about the issue
//! tracker. The real implementation is [`GitHubClient`](super::GitHubClient);
//! tests substitute an in-memory fake.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use super::error::GitHubError;

/// Comments fetched per listing page
pub const PER_PAGE: usize = 100;

/// Repository identity (`owner/repo`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoId {
    /// Create a repository identity
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parse `owner/repo`
    ///
    /// # Examples
    ///
    /// ```
    /// use bloat_report::github::RepoId;
    ///
    /// let repo = RepoId::parse("octo/app").unwrap();
    /// assert_eq!(repo.owner, "octo");
    /// assert_eq!(repo.repo, "app");
    /// assert!(RepoId::parse("no-slash").is_none());
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        let (owner, repo) = value.trim().split_once('/')?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }
        Some(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Issue or pull request number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueNumber(pub u64);

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issue comment identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An existing comment on an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    /// Comment identifier
    pub id: CommentId,
    /// Login of the comment author
    pub author: String,
    /// Comment body (empty when the API returns none)
    pub body: String,
}

/// Issue comment operations against a single repository
pub trait CommentApi {
    /// List one page (1-based) of comments on an issue, oldest first
    fn list_comments(
        &self,
        issue: IssueNumber,
        page: u32,
    ) -> impl Future<Output = Result<Vec<IssueComment>, GitHubError>> + Send;

    /// Create a comment and return its identifier
    fn create_comment(
        &self,
        issue: IssueNumber,
        body: &str,
    ) -> impl Future<Output = Result<CommentId, GitHubError>> + Send;

    /// Replace the body of an existing comment
    fn update_comment(
        &self,
        comment: CommentId,
        body: &str,
    ) -> impl Future<Output = Result<(), GitHubError>> + Send;
}

impl<T: CommentApi> CommentApi for &T {
    fn list_comments(
        &self,
        issue: IssueNumber,
        page: u32,
    ) -> impl Future<Output = Result<Vec<IssueComment>, GitHubError>> + Send {
        (**self).list_comments(issue, page)
    }

    fn create_comment(
        &self,
        issue: IssueNumber,
        body: &str,
    ) -> impl Future<Output = Result<CommentId, GitHubError>> + Send {
        (**self).create_comment(issue, body)
    }

    fn update_comment(
        &self,
        comment: CommentId,
        body: &str,
    ) -> impl Future<Output = Result<(), GitHubError>> + Send {
        (**self).update_comment(comment, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parse_rejects_malformed() {
        assert!(RepoId::parse("").is_none());
        assert!(RepoId::parse("/repo").is_none());
        assert!(RepoId::parse("owner/").is_none());
        assert!(RepoId::parse("a/b/c").is_none());
    }

    #[test]
    fn test_repo_id_display_round_trips() {
        let repo = RepoId::parse(" octo/app ").unwrap();
        assert_eq!(repo.to_string(), "octo/app");
    }

    #[test]
    fn test_issue_number_display() {
        assert_eq!(IssueNumber(42).to_string(), "#42");
    }
}
