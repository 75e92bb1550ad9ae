//! Markdown report rendering
//!
//! Pure, deterministic rendering of snapshot differences:
//! - Size table (total and text section)
//! - Per-crate breakdown
//! - Dependency tree diff with count summary
//! - Comment body wrapping one or more snapshots

pub mod comment;
pub mod crates;
pub mod marker;
pub mod size;
pub mod snapshot;
pub mod table;
pub mod tree;

pub use comment::{compare_url, compose_comment, CommentContext, CompareTarget};
pub use crates::crate_table;
pub use marker::{select_marker, DEFAULT_MARKER};
pub use size::{format_delta, size_table};
pub use snapshot::render_snapshot;
pub use table::TextTable;
pub use tree::{dependency_count_summary, render_tree_diff};
