//! Loading snapshot differences from JSON files

use super::types::SnapshotDifference;
use crate::error::BloatReportError;
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

/// Reads snapshot differences produced by the measurement step
pub struct SnapshotLoader;

impl SnapshotLoader {
    /// Load snapshots from a JSON file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bloat_report::snapshot::SnapshotLoader;
    /// use std::path::Path;
    ///
    /// let snapshots = SnapshotLoader::load(Path::new("bloat.json"))?;
    /// println!("Loaded {} snapshots", snapshots.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Vec<SnapshotDifference>> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load snapshots with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(path: &Path, fs: &FS) -> Result<Vec<SnapshotDifference>> {
        let contents = match fs.read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(BloatReportError::SnapshotsNotFound {
                    path: path.to_path_buf(),
                }
                .into());
            }
            Err(e) => {
                return Err(BloatReportError::Io {
                    context: format!("reading {}", path.display()),
                    source: e,
                }
                .into());
            }
        };

        Self::parse(&contents).map_err(|e| match e {
            ParseFailure::Json(source) => BloatReportError::InvalidSnapshots {
                path: path.to_path_buf(),
                source,
            }
            .into(),
            ParseFailure::Empty => BloatReportError::EmptySnapshots {
                path: path.to_path_buf(),
            }
            .into(),
        })
    }

    fn parse(contents: &str) -> Result<Vec<SnapshotDifference>, ParseFailure> {
        // The measurement step writes either one snapshot or an array of them
        let value: Value = serde_json::from_str(contents).map_err(ParseFailure::Json)?;
        let parsed = if value.is_array() {
            serde_json::from_value::<Vec<SnapshotDifference>>(value)
        } else {
            serde_json::from_value::<SnapshotDifference>(value).map(|one| vec![one])
        };
        let snapshots = parsed.map_err(ParseFailure::Json)?;

        if snapshots.is_empty() {
            return Err(ParseFailure::Empty);
        }

        log::debug!("Parsed {} snapshot(s)", snapshots.len());
        Ok(snapshots)
    }
}

enum ParseFailure {
    Json(serde_json::Error),
    Empty,
}
