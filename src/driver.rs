//! Commit driver: orchestrates diff, generation, commit, changelog and push.

use tracing::debug;

use crate::changelog::{ChangelogUpdate, update_changelog};
use crate::config::Config;
use crate::error::DriverError;
use crate::gemini::{GenerationBackend, generate_commit_message};
use crate::git::VcsPort;

/// What to do this run, derived from CLI words and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Rewrite the last commit's message instead of committing.
    pub regenerate: bool,
    /// Push after committing (normal mode only).
    pub push: bool,
    /// Create the changelog if it does not exist yet.
    pub changelog: bool,
    /// Print the generated message without touching git or the changelog.
    pub dry_run: bool,
}

impl RunOptions {
    /// Parse presence-based action words. Order does not matter and unknown
    /// words are ignored.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut options = Self::default();

        for word in words {
            match word.as_ref() {
                "regenerate" => options.regenerate = true,
                "push" => options.push = true,
                "changelog" => options.changelog = true,
                other => debug!("Ignoring unknown action '{}'", other),
            }
        }

        options
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NothingToCommit,
    NothingToRegenerate,
    Committed {
        message: String,
        changelog: ChangelogUpdate,
        pushed: bool,
    },
    Amended {
        message: String,
    },
    Previewed {
        message: String,
    },
}

/// Run one invocation against the given version-control port and backend.
///
/// `today` is the `YYYY-MM-DD` date used for the changelog heading.
pub async fn run<V, B>(
    config: &Config,
    options: &RunOptions,
    vcs: &V,
    backend: &B,
    today: &str,
) -> Result<Outcome, DriverError>
where
    V: VcsPort + ?Sized,
    B: GenerationBackend + ?Sized,
{
    if options.regenerate {
        return regenerate(config, options, vcs, backend).await;
    }

    let diff = vcs.staged_diff()?;
    if diff.trim().is_empty() {
        println!("No staged changes. Nothing to commit.");
        return Ok(Outcome::NothingToCommit);
    }

    println!("Generating commit message with {}...", config.model);
    let message = generate_commit_message(backend, &diff, &config.retry).await?;

    if options.dry_run {
        println!("{message}");
        return Ok(Outcome::Previewed { message });
    }

    vcs.commit(&message)?;
    println!("✓ Committed: {message}");

    let changelog = update_changelog(&config.changelog_path, &message, options.changelog, today)?;
    if changelog == ChangelogUpdate::Updated {
        println!("✓ Updated {}", config.changelog_path.display());
    }

    if options.push {
        println!("Pushing...");
        vcs.push()?;
        println!("✓ Pushed");
    }

    Ok(Outcome::Committed {
        message,
        changelog,
        pushed: options.push,
    })
}

/// Rewrite the last commit's message. Never touches the changelog or remote.
async fn regenerate<V, B>(
    config: &Config,
    options: &RunOptions,
    vcs: &V,
    backend: &B,
) -> Result<Outcome, DriverError>
where
    V: VcsPort + ?Sized,
    B: GenerationBackend + ?Sized,
{
    if options.push || options.changelog {
        debug!("regenerate mode ignores push and changelog");
    }

    let diff = vcs.last_commit_diff()?;
    if diff.trim().is_empty() {
        println!("Last commit has no changes. Nothing to regenerate.");
        return Ok(Outcome::NothingToRegenerate);
    }

    println!("Regenerating last commit message with {}...", config.model);
    let message = generate_commit_message(backend, &diff, &config.retry).await?;

    if options.dry_run {
        println!("{message}");
        return Ok(Outcome::Previewed { message });
    }

    vcs.amend_message(&message)?;
    println!("✓ Amended: {message}");

    Ok(Outcome::Amended { message })
}
