//! Render command implementation
//!
//! Handles the `bloat-report render` command, which composes the comment
//! body from a snapshot file and writes it to stdout or a file.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, ConfigLoader};
use crate::error::BloatReportError;
use crate::git::GitRepository;
use crate::github::RepoId;
use crate::infra::{CommandExecutor, FileSystem, RealFileSystem};
use crate::report::{compose_comment, CommentContext, CompareTarget};
use crate::snapshot::SnapshotLoader;

/// Inputs shared by the `render` and `post` commands
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// JSON file with one snapshot or an array of snapshots
    pub snapshots: PathBuf,
    /// Toolchain label
    pub toolchain: String,
    /// Baseline commit, absent on the first run
    pub base: Option<String>,
    /// Current commit; detected from git when absent
    pub current: Option<String>,
}

/// Compose the comment and print it, or write it to `output`
///
/// # Examples
///
/// ```no_run
/// use bloat_report::cmd::render::{cmd_render, ReportArgs};
///
/// let args = ReportArgs {
///     snapshots: "bloat.json".into(),
///     toolchain: "stable-x86_64-unknown-linux-gnu".to_string(),
///     base: None,
///     current: Some("0123abc".to_string()),
/// };
/// cmd_render(&args, None)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_render(args: &ReportArgs, output: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(Path::new("."))?;
    let body = build_comment(args, &config, &GitRepository::new())?;

    match output {
        Some(path) => write_comment(path, &body, &RealFileSystem),
        None => {
            print!("{}", body);
            Ok(())
        }
    }
}

/// Load snapshots and compose the comment body
pub fn build_comment<CE: CommandExecutor>(
    args: &ReportArgs,
    config: &ConfigFile,
    git: &GitRepository<CE>,
) -> Result<String> {
    if args.toolchain.trim().is_empty() {
        return Err(BloatReportError::EmptyToolchain.into());
    }

    let snapshots = SnapshotLoader::load(&args.snapshots)?;
    let current = resolve_current(args.current.as_deref(), git)?;
    let repo = configured_repo(config)?;
    if let Some(reason) = missing_link_reason(args.base.as_deref(), repo.as_ref()) {
        log::warn!("{}", reason);
    }

    let ctx = CommentContext {
        toolchain: &args.toolchain,
        current_commit: &current,
        base_commit: args.base.as_deref(),
        repository: repo.as_ref().map(|repo| CompareTarget {
            server_url: &config.github.server_url,
            repo,
        }),
    };

    Ok(compose_comment(&ctx, &snapshots))
}

/// Repository from configuration, if any
pub fn configured_repo(config: &ConfigFile) -> Result<Option<RepoId>, BloatReportError> {
    match config.github.repository.as_deref() {
        None => Ok(None),
        Some(value) => RepoId::parse(value)
            .map(Some)
            .ok_or_else(|| BloatReportError::InvalidRepository {
                value: value.to_string(),
            }),
    }
}

/// Explain why a baseline commit will not get a compare link
pub fn missing_link_reason(base: Option<&str>, repo: Option<&RepoId>) -> Option<String> {
    match (base, repo) {
        (Some(base), None) => Some(format!(
            "Baseline commit {} given but no repository configured; omitting compare link (set GITHUB_REPOSITORY or [github] repository)",
            base
        )),
        _ => None,
    }
}

/// Use the explicit commit, or fall back to `HEAD`
pub fn resolve_current<CE: CommandExecutor>(
    explicit: Option<&str>,
    git: &GitRepository<CE>,
) -> Result<String, BloatReportError> {
    if let Some(commit) = explicit.filter(|c| !c.trim().is_empty()) {
        return Ok(commit.trim().to_string());
    }

    match git.head_commit() {
        Ok(Some(hash)) => Ok(hash),
        Ok(None) => Err(BloatReportError::MissingCommit),
        Err(e) => {
            log::warn!("git lookup failed: {}", e);
            Err(BloatReportError::MissingCommit)
        }
    }
}

fn write_comment<FS: FileSystem>(path: &Path, body: &str, fs: &FS) -> Result<()> {
    fs.write(path, body).map_err(|source| BloatReportError::Io {
        context: format!("writing {}", path.display()),
        source,
    })?;
    log::info!("Wrote comment to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::process::{Command, Output};
    use tempfile::TempDir;

    struct NoGit;

    impl CommandExecutor for NoGit {
        fn output(&self, _cmd: &mut Command) -> io::Result<Output> {
            Err(io::Error::new(io::ErrorKind::NotFound, "git not installed"))
        }
    }

    const SNAPSHOT: &str = r#"{
        "packageName": "app",
        "currentSize": 2048,
        "oldSize": 1024,
        "sizeDifference": 1024,
        "currentTextSize": 512,
        "oldTextSize": 512,
        "textDifference": 0,
        "crateDifference": [{"name": "app", "old": 100, "new": 200}],
        "treeDiff": [{"value": "app v0.1.0\n"}],
        "oldDependenciesCount": 0,
        "newDependenciesCount": 0
    }"#;

    fn args(dir: &TempDir, current: Option<&str>) -> ReportArgs {
        let path = dir.path().join("bloat.json");
        fs::write(&path, SNAPSHOT).unwrap();
        ReportArgs {
            snapshots: path,
            toolchain: "stable-x86_64-unknown-linux-gnu".to_string(),
            base: Some("1111111".to_string()),
            current: current.map(str::to_string),
        }
    }

    #[test]
    fn test_build_comment_with_repository_links_commits() {
        let dir = TempDir::new().unwrap();
        let mut config = ConfigFile::default();
        config.github.repository = Some("octo/app".to_string());

        let body = build_comment(
            &args(&dir, Some("2222222")),
            &config,
            &GitRepository::with_executor(NoGit),
        )
        .unwrap();

        assert!(body.starts_with("## 🐧 "));
        assert!(body.contains("https://github.com/octo/app/compare/1111111..2222222"));
        assert!(body.contains("- app  100 B\n+ app  200 B"));
    }

    #[test]
    fn test_build_comment_without_repository_omits_link() {
        let dir = TempDir::new().unwrap();
        let body = build_comment(
            &args(&dir, Some("2222222")),
            &ConfigFile::default(),
            &GitRepository::with_executor(NoGit),
        )
        .unwrap();
        assert!(body.ends_with("Commit: 2222222\n"));
    }

    #[test]
    fn test_missing_commit_without_git() {
        let dir = TempDir::new().unwrap();
        let err = build_comment(
            &args(&dir, None),
            &ConfigFile::default(),
            &GitRepository::with_executor(NoGit),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BloatReportError>(),
            Some(BloatReportError::MissingCommit)
        ));
    }

    #[test]
    fn test_blank_toolchain_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut args = args(&dir, Some("2222222"));
        args.toolchain = " ".to_string();

        let err = build_comment(&args, &ConfigFile::default(), &GitRepository::with_executor(NoGit))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<BloatReportError>(),
            Some(BloatReportError::EmptyToolchain)
        ));
    }

    #[test]
    fn test_missing_link_reason_only_for_base_without_repo() {
        let repo = RepoId::new("octo", "app");
        let reason = missing_link_reason(Some("1111111"), None).unwrap();
        assert!(reason.contains("1111111"));
        assert!(reason.contains("GITHUB_REPOSITORY"));
        assert!(missing_link_reason(Some("1111111"), Some(&repo)).is_none());
        assert!(missing_link_reason(None, None).is_none());
    }

    #[test]
    fn test_configured_repo_rejects_garbage() {
        let mut config = ConfigFile::default();
        config.github.repository = Some("nope".to_string());
        assert!(matches!(
            configured_repo(&config),
            Err(BloatReportError::InvalidRepository { .. })
        ));
    }

    #[test]
    fn test_write_comment_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("comment.md");
        write_comment(&path, "body", &RealFileSystem).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "body");
    }
}
