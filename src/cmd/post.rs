//! Post command implementation
//!
//! Handles the `bloat-report post` command, which composes the comment and
//! creates or updates this toolchain's report on a pull request.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::render::{build_comment, configured_repo, ReportArgs};
use crate::config::{ConfigFile, ConfigLoader};
use crate::error::BloatReportError;
use crate::fmt::{CHART, CHECKMARK, INFO};
use crate::git::GitRepository;
use crate::github::{
    CommentApi, CommentUpserter, GitHubClient, IssueNumber, UpsertAction, UpsertOutcome,
};

/// Compose the report and publish it on `issue`
///
/// With `dry_run` the existing comments are still listed so the planned
/// action can be shown, but nothing is written.
pub fn cmd_post(args: &ReportArgs, issue: u64, dry_run: bool) -> Result<()> {
    let config = ConfigLoader::load(Path::new("."))?;
    let repo = configured_repo(&config)?.ok_or(BloatReportError::MissingRepository)?;
    let token = ConfigLoader::token(|key| std::env::var(key).ok())?;

    let body = build_comment(args, &config, &GitRepository::new())?;
    let client = GitHubClient::new(&config.github.api_url, &token, repo.clone())
        .map_err(BloatReportError::from)?;

    println!(
        "{} {} report for {} on {}{}",
        CHART,
        style("bloat-report").bold(),
        style(&args.toolchain).cyan(),
        repo,
        IssueNumber(issue)
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(publish(
        client,
        &config,
        IssueNumber(issue),
        &args.toolchain,
        &body,
        dry_run,
    ))
}

/// Run the upsert protocol against any comment API
pub async fn publish<A: CommentApi>(
    api: A,
    config: &ConfigFile,
    issue: IssueNumber,
    toolchain: &str,
    body: &str,
    dry_run: bool,
) -> Result<()> {
    let upserter = CommentUpserter::new(api, config.github.bot_login.as_str())
        .with_max_pages(config.github.comment_pages);

    let action = upserter
        .plan(issue, toolchain)
        .await
        .map_err(BloatReportError::from)?;

    if dry_run {
        let what = match action {
            UpsertAction::Create => "create a new comment".to_string(),
            UpsertAction::Update(id) => format!("update comment {}", id),
        };
        println!("{} Dry run: would {} on issue {}\n", INFO, what, issue);
        println!("{}", body);
        return Ok(());
    }

    match upserter
        .apply(action, issue, body)
        .await
        .map_err(BloatReportError::from)?
    {
        UpsertOutcome::Created(id) => {
            println!("{} Created comment {} on issue {}", CHECKMARK, id, issue)
        }
        UpsertOutcome::Updated(id) => {
            println!("{} Updated comment {} on issue {}", CHECKMARK, id, issue)
        }
    }

    Ok(())
}
