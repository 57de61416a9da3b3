//! gemit - CLI entry point.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemit::changelog::today;
use gemit::config::{Config, DEFAULT_CHANGELOG};
use gemit::driver::{self, RunOptions};
use gemit::gemini::GeminiClient;
use gemit::git::GitRepo;
use gemit::preflight::check_dependencies;

/// Write a conventional commit message for your staged changes using Gemini.
#[derive(Parser, Debug)]
#[command(name = "gemit")]
#[command(about = "Write a conventional commit message for your staged changes using Gemini")]
#[command(version)]
struct Cli {
    /// Actions, in any order: `push` (push after committing), `changelog`
    /// (create the changelog if missing), `regenerate` (rewrite the last
    /// commit's message). Unknown words, including unknown flags, are ignored.
    #[arg(allow_hyphen_values = true)]
    actions: Vec<String>,

    /// Path to changelog file
    #[arg(short = 'o', long, default_value = DEFAULT_CHANGELOG)]
    output: PathBuf,

    /// Print the generated message without committing
    #[arg(long)]
    dry_run: bool,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }
        process::exit(1);
    }
}

/// Log to stderr so diagnostics never mix with the printed message.
/// `RUST_LOG` wins over the defaults.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let options = RunOptions {
        dry_run: cli.dry_run,
        ..RunOptions::from_words(&cli.actions)
    };
    let config = Config::from_env().with_changelog_path(cli.output);

    // Step 1: Check prerequisites
    check_dependencies(&config)?;

    // Step 2: Open git repository
    let repo = GitRepo::discover(".")
        .context("Not a git repository. Run gemit from within a git repository.")?;

    let config = if config.changelog_path.is_relative() {
        let path = repo.workdir().join(&config.changelog_path);
        config.with_changelog_path(path)
    } else {
        config
    };

    // Step 3: Generate and apply
    let backend = GeminiClient::new(&config)?;
    driver::run(&config, &options, &repo, &backend, &today()).await?;

    Ok(())
}
