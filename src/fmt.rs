//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Format bytes as human-readable size string using binary prefixes
///
/// # Examples
///
/// ```
/// use bloat_report::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a signed byte delta. Negative values carry a leading `-`,
/// positive values are left unsigned (callers add `+` where wanted).
///
/// # Examples
///
/// ```
/// use bloat_report::fmt::format_signed_bytes;
///
/// assert_eq!(format_signed_bytes(-2048), "-2.00 KB");
/// assert_eq!(format_signed_bytes(300), "300 B");
/// ```
pub fn format_signed_bytes(delta: i64) -> String {
    if delta < 0 {
        format!("-{}", format_bytes(delta.unsigned_abs()))
    } else {
        format_bytes(delta.unsigned_abs())
    }
}
