//! Snapshot fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// A snapshot whose total size grew and which gained one crate
pub const GROWN_SNAPSHOT: &str = r#"{
    "packageName": "app",
    "currentSize": 409600,
    "oldSize": 307200,
    "sizeDifference": 102400,
    "currentTextSize": 204800,
    "oldTextSize": 204800,
    "textDifference": 0,
    "crateDifference": [
        {"name": "std", "old": 1000, "new": 1000},
        {"name": "regex", "old": 500, "new": null},
        {"name": "memchr", "old": null, "new": 800},
        {"name": "ghost", "old": null, "new": null}
    ],
    "treeDiff": [
        {"count": 1, "value": "app v0.1.0\n"},
        {"count": 1, "removed": true, "value": "└── regex v1.10.0\n"},
        {"count": 1, "added": true, "value": "└── memchr v2.7.1\n"}
    ],
    "oldDependenciesCount": 10,
    "newDependenciesCount": 12
}"#;

/// A first-run snapshot with no baseline values
pub const FIRST_RUN_SNAPSHOT: &str = r#"{
    "packageName": "cli",
    "currentSize": 2048,
    "oldSize": null,
    "sizeDifference": 0,
    "currentTextSize": 1024,
    "oldTextSize": null,
    "textDifference": 0,
    "crateDifference": [],
    "treeDiff": "cli v0.1.0\n",
    "oldDependenciesCount": 0,
    "newDependenciesCount": 0
}"#;

/// Write `contents` as `bloat.json` in `dir`
pub fn write_snapshots(dir: &Path, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.join("bloat.json");
    fs::write(&path, contents)?;
    Ok(path)
}

/// Both fixtures as a JSON array
pub fn both_snapshots() -> String {
    format!("[{}, {}]", GROWN_SNAPSHOT, FIRST_RUN_SNAPSHOT)
}
