//! Command handlers for the bloat-report CLI
//!
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod post;
pub mod render;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use post::cmd_post;
pub use render::{cmd_render, ReportArgs};
