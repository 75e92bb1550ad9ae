//! Snapshot difference data model
//!
//! These records are produced by the size measurement step and handed to
//! the renderer fully populated. Field names follow the camelCase JSON the
//! measurement step emits.

use serde::{Deserialize, Serialize};

/// Size comparison for one build snapshot (one toolchain/platform)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDifference {
    /// Package the binary was built from
    pub package_name: String,

    /// Total binary size of the current build in bytes
    pub current_size: u64,
    /// Total binary size of the baseline build (absent on first run)
    #[serde(default)]
    pub old_size: Option<u64>,
    /// Signed change in total size
    #[serde(default)]
    pub size_difference: i64,

    /// Text section size of the current build in bytes
    pub current_text_size: u64,
    /// Text section size of the baseline build (absent on first run)
    #[serde(default)]
    pub old_text_size: Option<u64>,
    /// Signed change in text section size
    #[serde(default)]
    pub text_difference: i64,

    /// Per-crate size entries in display order
    #[serde(default)]
    pub crate_difference: Vec<CrateDifference>,

    /// Dependency tree diff
    #[serde(default)]
    pub tree_diff: TreeDiff,

    /// Number of dependencies in the baseline tree
    #[serde(default)]
    pub old_dependencies_count: u64,
    /// Number of dependencies in the current tree
    #[serde(default)]
    pub new_dependencies_count: u64,
}

impl SnapshotDifference {
    /// Whether total size changed enough to be shown as a diff
    pub fn total_size_changed(&self) -> bool {
        is_meaningful_change(self.old_size, self.current_size)
    }

    /// Whether text section size changed enough to be shown as a diff
    pub fn text_size_changed(&self) -> bool {
        is_meaningful_change(self.old_text_size, self.current_text_size)
    }
}

/// Decide whether an (old, new) size pair is shown as a diff.
///
/// A missing baseline is never a change: the first snapshot shows only
/// the current value.
///
/// # Examples
///
/// ```
/// use bloat_report::snapshot::is_meaningful_change;
///
/// assert!(is_meaningful_change(Some(100), 120));
/// assert!(!is_meaningful_change(Some(100), 100));
/// assert!(!is_meaningful_change(None, 100));
/// ```
pub fn is_meaningful_change(old: Option<u64>, new: u64) -> bool {
    match old {
        Some(old) => old != new,
        None => false,
    }
}

/// Size of a single crate in the baseline and current builds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrateDifference {
    /// Crate name
    pub name: String,
    /// Size in the baseline build (absent when the crate was added)
    #[serde(default)]
    pub old: Option<u64>,
    /// Size in the current build (absent when the crate was removed)
    #[serde(default)]
    pub new: Option<u64>,
}

/// What happened to a crate between the two builds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrateChange {
    /// Present in both builds with the same size
    Unchanged(u64),
    /// Size differs, or the crate appeared/disappeared
    Changed {
        /// Baseline size, if any
        old: Option<u64>,
        /// Current size, if any
        new: Option<u64>,
    },
}

impl CrateDifference {
    /// Classify this entry. Returns `None` when both sides are absent,
    /// meaning the row must be dropped.
    pub fn change(&self) -> Option<CrateChange> {
        match (self.old, self.new) {
            (None, None) => None,
            (Some(old), Some(new)) if old == new => Some(CrateChange::Unchanged(new)),
            (old, new) => Some(CrateChange::Changed { old, new }),
        }
    }
}

/// Dependency tree diff, either pre-rendered text or line-diff segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeDiff {
    /// Already rendered, used verbatim
    Text(String),
    /// Ordered line-diff segments
    Segments(Vec<DiffSegment>),
}

impl Default for TreeDiff {
    fn default() -> Self {
        TreeDiff::Text(String::new())
    }
}

/// Classification of a line-diff segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Lines present only in the current tree
    Added,
    /// Lines present only in the baseline tree
    Removed,
    /// Lines common to both trees
    Unchanged,
}

impl SegmentKind {
    /// Diff line prefix for this kind
    pub fn prefix(self) -> char {
        match self {
            SegmentKind::Added => '+',
            SegmentKind::Removed => '-',
            SegmentKind::Unchanged => ' ',
        }
    }
}

/// One block of newline-terminated lines sharing the same classification
///
/// Deserializes from the `{ "value", "added", "removed" }` objects that
/// line-diff libraries emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSegment", into = "RawSegment")]
pub struct DiffSegment {
    /// Segment classification
    pub kind: SegmentKind,
    /// One or more newline-terminated lines
    pub value: String,
}

impl DiffSegment {
    /// Create a segment of the given kind
    pub fn new(kind: SegmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct RawSegment {
    value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    added: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    removed: bool,
}

impl From<RawSegment> for DiffSegment {
    fn from(raw: RawSegment) -> Self {
        let kind = if raw.added {
            SegmentKind::Added
        } else if raw.removed {
            SegmentKind::Removed
        } else {
            SegmentKind::Unchanged
        };
        Self {
            kind,
            value: raw.value,
        }
    }
}

impl From<DiffSegment> for RawSegment {
    fn from(segment: DiffSegment) -> Self {
        Self {
            added: segment.kind == SegmentKind::Added,
            removed: segment.kind == SegmentKind::Removed,
            value: segment.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, old: Option<u64>, new: Option<u64>) -> CrateDifference {
        CrateDifference {
            name: name.to_string(),
            old,
            new,
        }
    }

    #[test]
    fn test_crate_change_classification() {
        assert_eq!(entry("a", None, None).change(), None);
        assert_eq!(
            entry("a", Some(10), Some(10)).change(),
            Some(CrateChange::Unchanged(10))
        );
        assert_eq!(
            entry("a", Some(10), None).change(),
            Some(CrateChange::Changed {
                old: Some(10),
                new: None
            })
        );
        assert_eq!(
            entry("a", None, Some(5)).change(),
            Some(CrateChange::Changed {
                old: None,
                new: Some(5)
            })
        );
    }

    #[test]
    fn test_meaningful_change_requires_baseline() {
        assert!(!is_meaningful_change(None, 0));
        assert!(!is_meaningful_change(Some(42), 42));
        assert!(is_meaningful_change(Some(41), 42));
    }

    #[test]
    fn test_tree_diff_deserializes_plain_string() {
        let tree: TreeDiff = serde_json::from_str(r#""foo v0.1.0\n""#).unwrap();
        assert_eq!(tree, TreeDiff::Text("foo v0.1.0\n".to_string()));
    }

    #[test]
    fn test_tree_diff_deserializes_segments() {
        let json = r#"[
            {"count": 1, "value": "a\n"},
            {"count": 1, "added": true, "removed": false, "value": "b\n"},
            {"count": 2, "removed": true, "value": "c\nd\n"}
        ]"#;
        let tree: TreeDiff = serde_json::from_str(json).unwrap();
        assert_eq!(
            tree,
            TreeDiff::Segments(vec![
                DiffSegment::new(SegmentKind::Unchanged, "a\n"),
                DiffSegment::new(SegmentKind::Added, "b\n"),
                DiffSegment::new(SegmentKind::Removed, "c\nd\n"),
            ])
        );
    }

    #[test]
    fn test_snapshot_deserializes_first_run_without_baseline() {
        let json = r#"{
            "packageName": "app",
            "currentSize": 2048,
            "oldSize": null,
            "sizeDifference": 0,
            "currentTextSize": 1024,
            "crateDifference": [{"name": "std", "old": null, "new": 512}],
            "treeDiff": "app v0.1.0\n",
            "oldDependenciesCount": 0,
            "newDependenciesCount": 3
        }"#;
        let snapshot: SnapshotDifference = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.package_name, "app");
        assert_eq!(snapshot.old_size, None);
        assert_eq!(snapshot.old_text_size, None);
        assert!(!snapshot.total_size_changed());
        assert!(!snapshot.text_size_changed());
        assert_eq!(snapshot.crate_difference.len(), 1);
    }

    #[test]
    fn test_segment_prefixes() {
        assert_eq!(SegmentKind::Added.prefix(), '+');
        assert_eq!(SegmentKind::Removed.prefix(), '-');
        assert_eq!(SegmentKind::Unchanged.prefix(), ' ');
    }
}
