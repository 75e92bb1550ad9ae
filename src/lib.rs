#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! bloat-report library
//!
//! Renders binary size, per-crate size and dependency tree changes between
//! a baseline and a current build as a pull request comment, and keeps one
//! such comment per toolchain up to date.
//!
//! # Basic Example
//!
//! Rendering a comment for a single snapshot:
//!
//! ```
//! use bloat_report::report::{compose_comment, CommentContext};
//! use bloat_report::snapshot::{CrateDifference, SnapshotDifference, TreeDiff};
//!
//! let snapshot = SnapshotDifference {
//!     package_name: "app".to_string(),
//!     current_size: 4096,
//!     old_size: Some(2048),
//!     size_difference: 2048,
//!     current_text_size: 1024,
//!     old_text_size: Some(1024),
//!     text_difference: 0,
//!     crate_difference: vec![CrateDifference {
//!         name: "serde".to_string(),
//!         old: None,
//!         new: Some(800),
//!     }],
//!     tree_diff: TreeDiff::Text("app v0.1.0\n".to_string()),
//!     old_dependencies_count: 0,
//!     new_dependencies_count: 1,
//! };
//!
//! let ctx = CommentContext {
//!     toolchain: "x86_64-apple-darwin",
//!     current_commit: "abc1234",
//!     base_commit: None,
//!     repository: None,
//! };
//!
//! let body = compose_comment(&ctx, &[snapshot]);
//! assert!(body.contains("4.00 KB  +2.00 KB"));
//! assert!(body.contains("+ serde  800 B"));
//! assert!(body.contains("+ Count: 1"));
//! ```
//!
//! # Advanced Example: Publishing
//!
//! Creating or updating the toolchain's comment on a pull request:
//!
//! ```no_run
//! use bloat_report::github::{CommentUpserter, GitHubClient, IssueNumber, RepoId};
//!
//! # async fn run(body: &str) -> Result<(), bloat_report::github::GitHubError> {
//! let client = GitHubClient::new(
//!     "https://api.github.com",
//!     "ghs_token",
//!     RepoId::new("octo", "app"),
//! )?;
//! let upserter = CommentUpserter::new(client, "github-actions[bot]");
//! let outcome = upserter.upsert(IssueNumber(42), "x86_64-apple-darwin", body).await?;
//! println!("Comment {}", outcome.comment_id());
//! # Ok(())
//! # }
//! ```

/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file and environment handling
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Git metadata utilities
pub mod git;
/// GitHub issue comment client and upsert protocol
pub mod github;
/// Infrastructure traits for filesystem and command execution
pub mod infra;
/// Markdown report rendering
pub mod report;
/// Snapshot difference data model and loading
pub mod snapshot;
