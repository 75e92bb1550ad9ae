//! Dependency tree diff and dependency count summary

use crate::snapshot::{DiffSegment, TreeDiff};

/// Render the tree diff body.
///
/// Pre-rendered text is returned as is. Segments are expanded line by line
/// with a `+`, `-` or blank marker, each segment block is terminated by a
/// newline, and one extra newline closes the whole diff.
///
/// # Examples
///
/// ```
/// use bloat_report::report::render_tree_diff;
/// use bloat_report::snapshot::{DiffSegment, SegmentKind, TreeDiff};
///
/// let diff = TreeDiff::Segments(vec![
///     DiffSegment::new(SegmentKind::Unchanged, "app v0.1.0\n"),
///     DiffSegment::new(SegmentKind::Added, "└── log v0.4.20\n"),
/// ]);
/// assert_eq!(
///     render_tree_diff(&diff),
///     "  app v0.1.0\n+ └── log v0.4.20\n\n"
/// );
/// ```
pub fn render_tree_diff(diff: &TreeDiff) -> String {
    match diff {
        TreeDiff::Text(text) => text.clone(),
        TreeDiff::Segments(segments) => {
            let mut out: String = segments.iter().map(render_segment).collect();
            out.push('\n');
            out
        }
    }
}

fn render_segment(segment: &DiffSegment) -> String {
    let prefix = segment.kind.prefix();
    let mut lines: Vec<&str> = segment.value.split('\n').collect();
    // A newline-terminated value leaves an empty fragment at the end
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut block = lines
        .iter()
        .map(|line| format!("{} {}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n");
    block.push('\n');
    block
}

/// Dependency count line(s) shown above the tree
///
/// # Examples
///
/// ```
/// use bloat_report::report::dependency_count_summary;
///
/// assert_eq!(dependency_count_summary(10, 10), "Count: 10");
/// assert_eq!(dependency_count_summary(10, 12), "- Count: 10\n+ Count: 12");
/// ```
pub fn dependency_count_summary(old: u64, new: u64) -> String {
    if old == new {
        format!("Count: {}", new)
    } else {
        format!("- Count: {}\n+ Count: {}", old, new)
    }
}
