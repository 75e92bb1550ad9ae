//! Per-crate size breakdown rows

use super::table::TextTable;
use crate::fmt::format_bytes;
use crate::snapshot::{CrateChange, CrateDifference};

/// Build the per-crate table.
///
/// Entries missing on both sides are dropped. Unchanged entries yield one
/// unlabeled row; changed entries yield a removed row for the old size (if
/// any) followed by an added row for the new size (if any).
pub fn crate_table(entries: &[CrateDifference]) -> TextTable {
    let mut table = TextTable::new();

    for entry in entries {
        match entry.change() {
            None => {}
            Some(CrateChange::Unchanged(size)) => {
                table.push_row([entry.name.clone(), format_bytes(size)]);
            }
            Some(CrateChange::Changed { old, new }) => {
                if let Some(old) = old {
                    table.push_row([format!("- {}", entry.name), format_bytes(old)]);
                }
                if let Some(new) = new {
                    table.push_row([format!("+ {}", entry.name), format_bytes(new)]);
                }
            }
        }
    }

    table
}
