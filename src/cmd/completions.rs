//! Completions command implementation
//!
//! Handles the `bloat-report completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts for the CLI definition `C`
///
/// Outputs completion script for the specified shell to stdout.
///
/// # Examples
///
/// ```bash
/// bloat-report completions bash > /etc/bash_completion.d/bloat-report
/// bloat-report completions zsh > ~/.zfunc/_bloat-report
/// ```
pub fn cmd_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
