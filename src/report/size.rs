//! Total and text-section size table

use super::table::TextTable;
use crate::fmt::{format_bytes, format_signed_bytes};
use crate::snapshot::{is_meaningful_change, SnapshotDifference};

/// Label for the total binary size row
pub const TOTAL_SIZE_LABEL: &str = "Size";
/// Label for the text section size row
pub const TEXT_SIZE_LABEL: &str = "Text section size";

/// Build the size table for a snapshot: total size, then text section size
pub fn size_table(snapshot: &SnapshotDifference) -> TextTable {
    let mut table = TextTable::new();
    push_size_rows(
        &mut table,
        TOTAL_SIZE_LABEL,
        snapshot.old_size,
        snapshot.current_size,
        snapshot.size_difference,
    );
    push_size_rows(
        &mut table,
        TEXT_SIZE_LABEL,
        snapshot.old_text_size,
        snapshot.current_text_size,
        snapshot.text_difference,
    );
    table
}

/// Append the rows for one size pair.
///
/// A changed pair yields a removed row with the old value and an added row
/// with the new value and delta. Otherwise a single unlabeled row shows the
/// current value.
pub fn push_size_rows(
    table: &mut TextTable,
    label: &str,
    old: Option<u64>,
    new: u64,
    delta: i64,
) {
    match old {
        Some(old) if is_meaningful_change(Some(old), new) => {
            table.push_row([format!("- {}", label), format_bytes(old)]);
            table.push_row([format!("+ {}", label), format_bytes(new), format_delta(delta)]);
        }
        _ => table.push_row([label.to_string(), format_bytes(new)]),
    }
}

/// Humanized delta with an explicit `+` for growth
///
/// # Examples
///
/// ```
/// use bloat_report::report::format_delta;
///
/// assert_eq!(format_delta(2048), "+2.00 KB");
/// assert_eq!(format_delta(-10), "-10 B");
/// assert_eq!(format_delta(0), "0 B");
/// ```
pub fn format_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", format_signed_bytes(delta))
    } else {
        format_signed_bytes(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rows(old: Option<u64>, new: u64, delta: i64) -> Vec<String> {
        let mut table = TextTable::new();
        push_size_rows(&mut table, "Size", old, new, delta);
        table.render().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_first_run_shows_current_value_only() {
        assert_eq!(rows(None, 2048, 0), vec!["Size  2.00 KB"]);
    }

    #[test]
    fn test_unchanged_size_shows_single_row() {
        assert_eq!(rows(Some(512), 512, 0), vec!["Size  512 B"]);
    }

    #[test]
    fn test_growth_shows_removed_then_added_with_plus() {
        assert_eq!(
            rows(Some(1024), 2048, 1024),
            vec!["- Size  1.00 KB", "+ Size  2.00 KB  +1.00 KB"]
        );
    }

    #[test]
    fn test_shrink_delta_keeps_own_sign() {
        assert_eq!(
            rows(Some(2048), 1024, -1024),
            vec!["- Size  2.00 KB", "+ Size  1.00 KB  -1.00 KB"]
        );
    }

    #[test]
    fn test_size_table_orders_total_before_text() {
        let snapshot = SnapshotDifference {
            package_name: "app".to_string(),
            current_size: 3000,
            old_size: Some(2000),
            size_difference: 1000,
            current_text_size: 100,
            old_text_size: Some(100),
            text_difference: 0,
            crate_difference: vec![],
            tree_diff: Default::default(),
            old_dependencies_count: 0,
            new_dependencies_count: 0,
        };
        let rendered = size_table(&snapshot).render();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("- Size "));
        assert!(lines[1].starts_with("+ Size "));
        assert!(lines[1].ends_with("+1000 B"));
        assert!(lines[2].starts_with("Text section size"));
    }

    proptest! {
        /// Property: a present, different baseline yields removed + added rows,
        /// and the delta carries `+` exactly when the size grew
        #[test]
        fn prop_changed_pair_shows_both_rows(old in 0u64..10_000_000, new in 0u64..10_000_000) {
            prop_assume!(old != new);
            let delta = new as i64 - old as i64;
            let lines = rows(Some(old), new, delta);

            prop_assert_eq!(lines.len(), 2);
            prop_assert!(lines[0].starts_with("- Size"));
            prop_assert!(lines[1].starts_with("+ Size"));
            let delta_cell = lines[1].rsplit("  ").next().unwrap_or_default().to_string();
            prop_assert_eq!(delta_cell.starts_with('+'), new > old);
        }

        /// Property: without a baseline exactly one unlabeled row shows the new value
        #[test]
        fn prop_missing_baseline_single_row(new in 0u64..10_000_000) {
            let lines = rows(None, new, 0);
            prop_assert_eq!(lines, vec![format!("Size  {}", format_bytes(new))]);
        }
    }
}
