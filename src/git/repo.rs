//! [`VcsPort`] backed by a real repository.
//!
//! Diffs are read with git2. Mutations shell out to the system `git` binary
//! inside the work tree, inheriting the user's hooks, signing config, SSH agent
//! and credential store.

use std::path::{Path, PathBuf};
use std::process::Command;

use git2::{Diff, DiffFormat, ErrorCode, Repository, Tree};
use tracing::debug;

use crate::error::GitError;

use super::VcsPort;

pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let repo = Repository::discover(path).map_err(GitError::OpenRepository)?;
        let workdir = repo
            .workdir()
            .ok_or(GitError::BareRepository)?
            .to_path_buf();

        Ok(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Resolve the HEAD tree, distinguishing an unborn branch from real failures.
    fn head_tree(&self) -> Result<Option<Tree<'_>>, GitError> {
        let head = match self.repo.head() {
            Ok(r) => r,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(GitError::DiffFailed(e)),
        };

        let tree = head.peel_to_tree().map_err(GitError::DiffFailed)?;
        Ok(Some(tree))
    }

    /// Run a git command in the work tree.
    fn run_git(&self, args: &[&str], operation: &'static str) -> Result<(), GitError> {
        debug!("Running git {}", args.join(" "));

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.workdir)
            .args(args)
            .output()
            .map_err(|source| GitError::SpawnFailed { operation, source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(GitError::CommandFailed {
                operation,
                stderr: detail.trim().to_string(),
            });
        }

        Ok(())
    }
}

impl VcsPort for GitRepo {
    fn staged_diff(&self) -> Result<String, GitError> {
        let head_tree = self.head_tree()?;

        // Pick up anything staged by another process since the repo was opened.
        let mut index = self.repo.index().map_err(GitError::DiffFailed)?;
        index.read(false).map_err(GitError::DiffFailed)?;

        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
            .map_err(GitError::DiffFailed)?;

        render_patch(&diff)
    }

    fn last_commit_diff(&self) -> Result<String, GitError> {
        let head = match self.repo.head() {
            Ok(r) => r,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Err(GitError::NoCommits);
            }
            Err(e) => return Err(GitError::DiffFailed(e)),
        };

        let commit = head.peel_to_commit().map_err(GitError::DiffFailed)?;
        if commit.parent_count() == 0 {
            return Err(GitError::NoParentCommit);
        }

        let parent = commit.parent(0).map_err(GitError::DiffFailed)?;
        let old_tree = parent.tree().map_err(GitError::DiffFailed)?;
        let new_tree = commit.tree().map_err(GitError::DiffFailed)?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)
            .map_err(GitError::DiffFailed)?;

        render_patch(&diff)
    }

    fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message], "commit")
    }

    fn amend_message(&self, message: &str) -> Result<(), GitError> {
        // --only with no paths rewrites the message without taking staged content.
        self.run_git(&["commit", "--amend", "--only", "-m", message], "commit --amend")
    }

    fn push(&self) -> Result<(), GitError> {
        self.run_git(&["push"], "push")
    }
}

/// Render a diff as unified patch text.
fn render_patch(diff: &Diff<'_>) -> Result<String, GitError> {
    let mut text = String::new();

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    })
    .map_err(GitError::DiffFailed)?;

    Ok(text)
}
