//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Snapshot fixtures in the measurement step's JSON format
//! - A preconfigured command for the CLI binary

pub mod fixtures;

use assert_cmd::Command;

/// The CLI binary with GitHub-related environment cleared
#[allow(dead_code)]
pub fn bloat_report() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bloat-report"));
    for key in [
        "GITHUB_TOKEN",
        "GITHUB_REPOSITORY",
        "GITHUB_API_URL",
        "GITHUB_SERVER_URL",
        "BLOAT_REPORT_BOT_LOGIN",
    ] {
        cmd.env_remove(key);
    }
    cmd
}
