//! Markdown fragment for a single snapshot

use super::crates::crate_table;
use super::size::size_table;
use super::tree::{dependency_count_summary, render_tree_diff};
use crate::snapshot::SnapshotDifference;

/// Shown instead of an empty per-crate table
pub const NO_CRATE_CHANGES: &str = "No changes to crate sizes";

const CRATE_NOTE: &str =
    "**Note:** per-crate figures are approximate and may not add up to the total size.";

/// Render one snapshot: size block, per-crate details, dependency tree details
pub fn render_snapshot(snapshot: &SnapshotDifference) -> String {
    let size = size_table(snapshot).render();
    let crates = crate_table(&snapshot.crate_difference);
    let count = dependency_count_summary(
        snapshot.old_dependencies_count,
        snapshot.new_dependencies_count,
    );
    let mut tree = render_tree_diff(&snapshot.tree_diff);
    // Closing fence must start on its own line
    if !tree.is_empty() && !tree.ends_with('\n') {
        tree.push('\n');
    }

    let crate_section = if crates.is_empty() {
        NO_CRATE_CHANGES.to_string()
    } else {
        format!(
            "{}\n\n```diff\n@@ Breakdown per crate @@\n\n{}\n\n```",
            CRATE_NOTE,
            crates.render()
        )
    };

    format!(
        "```diff\n@@ Size breakdown @@\n\n{size}\n\n```\n\n\
         {crate_details}\n\n\
         {tree_details}",
        size = size,
        crate_details = details("Size difference per crate", &crate_section),
        tree_details = details(
            "Dependency tree",
            &format!("```diff\n@@ Dependency tree @@\n{}\n\n{}```", count, tree)
        ),
    )
}

/// Wrap content in a collapsible `<details>` section
pub fn details(summary: &str, content: &str) -> String {
    format!(
        "<details>\n<summary>{}</summary>\n<br />\n\n{}\n\n</details>",
        summary, content
    )
}
