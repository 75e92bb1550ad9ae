//! GitHub issue comment publishing
//!
//! This module provides:
//! - The `CommentApi` seam and its reqwest-based implementation
//! - The create-or-update protocol keyed on the toolchain label

pub mod api;
pub mod client;
pub mod error;
pub mod upsert;

pub use api::{CommentApi, CommentId, IssueComment, IssueNumber, RepoId, PER_PAGE};
pub use client::GitHubClient;
pub use error::GitHubError;
pub use upsert::{CommentUpserter, UpsertAction, UpsertOutcome};
