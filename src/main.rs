use bloat_report::cmd::{self, ReportArgs};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

/// Binary size change reports for pull requests
///
/// bloat-report turns precomputed size measurements into a Markdown comment
/// and keeps one such comment per toolchain up to date on a pull request.
#[derive(Parser)]
#[command(name = "bloat-report", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ReportOpts {
    /// JSON file with the snapshot difference(s)
    #[arg(short, long, value_name = "FILE")]
    snapshots: PathBuf,

    /// Toolchain label (also identifies the comment to update)
    #[arg(short, long)]
    toolchain: String,

    /// Baseline commit the sizes are compared against
    #[arg(long, value_name = "SHA")]
    base: Option<String>,

    /// Current commit (defaults to `git rev-parse HEAD`)
    #[arg(long, value_name = "SHA")]
    current: Option<String>,
}

impl From<ReportOpts> for ReportArgs {
    fn from(opts: ReportOpts) -> Self {
        Self {
            snapshots: opts.snapshots,
            toolchain: opts.toolchain,
            base: opts.base,
            current: opts.current,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render the comment body
    Render {
        #[command(flatten)]
        report: ReportOpts,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Create or update the report comment on a pull request
    Post {
        #[command(flatten)]
        report: ReportOpts,

        /// Pull request or issue number
        #[arg(short, long)]
        issue: u64,

        /// Show what would be posted without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match cli.command {
        Commands::Render { report, output } => {
            cmd::cmd_render(&report.into(), output.as_deref())
        }
        Commands::Post {
            report,
            issue,
            dry_run,
        } => cmd::cmd_post(&report.into(), issue, dry_run),
        Commands::Completions { shell } => {
            cmd::cmd_completions::<Cli>(shell);
            Ok(())
        }
    };

    if let Err(e) = result {
        use bloat_report::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
