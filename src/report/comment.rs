//! Comment body composition across one or more snapshots

use super::marker::select_marker;
use super::snapshot::{details, render_snapshot};
use crate::github::RepoId;
use crate::snapshot::SnapshotDifference;

/// Appended to a snapshot's section title when its total size changed
pub const SIZE_CHANGED_SUFFIX: &str = " (⚠️ size changed)";

/// Run metadata needed to compose a comment
#[derive(Debug, Clone)]
pub struct CommentContext<'a> {
    /// Toolchain label; also the key used to find this comment again
    pub toolchain: &'a str,
    /// Commit the current build was made from
    pub current_commit: &'a str,
    /// Commit of the baseline build, absent on the first run
    pub base_commit: Option<&'a str>,
    /// Where compare links point; no link is rendered without it
    pub repository: Option<CompareTarget<'a>>,
}

/// Repository host used to build compare links
#[derive(Debug, Clone, Copy)]
pub struct CompareTarget<'a> {
    /// Web host, e.g. `https://github.com`
    pub server_url: &'a str,
    /// Repository the commits belong to
    pub repo: &'a RepoId,
}

/// Build a `<host>/<owner>/<repo>/compare/<base>..<current>` link
///
/// # Examples
///
/// ```
/// use bloat_report::github::RepoId;
/// use bloat_report::report::compare_url;
///
/// let repo = RepoId::new("octo", "app");
/// assert_eq!(
///     compare_url("https://github.com/", &repo, "abc", "def"),
///     "https://github.com/octo/app/compare/abc..def"
/// );
/// ```
pub fn compare_url(server_url: &str, repo: &RepoId, base: &str, current: &str) -> String {
    format!(
        "{}/{}/{}/compare/{}..{}",
        server_url.trim_end_matches('/'),
        repo.owner,
        repo.repo,
        base,
        current
    )
}

/// Compose the full comment body.
///
/// A single snapshot is inlined; several snapshots each get a collapsible
/// section titled with the package name, in input order. Callers must pass
/// at least one snapshot.
pub fn compose_comment(ctx: &CommentContext<'_>, snapshots: &[SnapshotDifference]) -> String {
    let marker = select_marker(ctx.toolchain);

    let inner = match snapshots {
        [single] => render_snapshot(single),
        many => many
            .iter()
            .map(|snapshot| details(&section_title(snapshot), &render_snapshot(snapshot)))
            .collect::<Vec<_>>()
            .join("\n\n"),
    };

    let link = match (ctx.base_commit, ctx.repository) {
        (Some(base), Some(target)) => format!(
            " ([Compare with baseline]({}))",
            compare_url(target.server_url, target.repo, base, ctx.current_commit)
        ),
        _ => String::new(),
    };

    format!(
        "## {marker} Cargo bloat for toolchain **{toolchain}** {marker}\n\n\
         {inner}\n\n\
         Commit: {current}{link}\n",
        marker = marker,
        toolchain = ctx.toolchain,
        inner = inner,
        current = ctx.current_commit,
        link = link,
    )
}

fn section_title(snapshot: &SnapshotDifference) -> String {
    let name = escape_html(&snapshot.package_name);
    if snapshot.total_size_changed() {
        format!("{}{}", name, SIZE_CHANGED_SUFFIX)
    } else {
        name
    }
}

/// Escape text placed inside an HTML element
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
