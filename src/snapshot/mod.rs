//! Snapshot difference records handed in by the size measurement step
//!
//! This module provides:
//! - The per-snapshot data model (sizes, per-crate entries, tree diff)
//! - JSON loading of one or many snapshots

pub mod loader;
pub mod types;

pub use loader::SnapshotLoader;
pub use types::{
    is_meaningful_change, CrateChange, CrateDifference, DiffSegment, SegmentKind,
    SnapshotDifference, TreeDiff,
};
