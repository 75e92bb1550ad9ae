//! Toolchain marker selection
//!
//! The marker decorates the comment heading and, together with the
//! toolchain name, identifies which comment belongs to which toolchain.

/// Marker used when no rule matches the toolchain
pub const DEFAULT_MARKER: &str = "🦀";

/// Ordered (substring, marker) rules; the first matching rule wins.
///
/// Platform vendors come before operating systems so that e.g.
/// `aarch64-apple-ios` resolves to the apple marker.
pub const MARKER_RULES: &[(&str, &str)] = &[
    ("apple", "🍏"),
    ("darwin", "🍏"),
    ("windows", "🪟"),
    ("android", "🤖"),
    ("linux", "🐧"),
    ("wasm", "🕸️"),
    ("freebsd", "😈"),
];

/// Pick the marker for a toolchain label
///
/// # Examples
///
/// ```
/// use bloat_report::report::select_marker;
///
/// assert_eq!(select_marker("x86_64-apple-darwin"), "🍏");
/// assert_eq!(select_marker("stable-x86_64-unknown-linux-gnu"), "🐧");
/// assert_eq!(select_marker("nightly"), "🦀");
/// ```
pub fn select_marker(toolchain: &str) -> &'static str {
    MARKER_RULES
        .iter()
        .find(|(needle, _)| toolchain.contains(needle))
        .map(|(_, marker)| *marker)
        .unwrap_or(DEFAULT_MARKER)
}
