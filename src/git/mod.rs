//! Version-control port and its git implementation.

pub mod repo;

pub use repo::GitRepo;

use crate::error::GitError;

/// The version-control operations the commit driver needs.
///
/// Kept narrow so the driver can run against a fake in tests.
pub trait VcsPort {
    /// Unified diff of the index against HEAD.
    fn staged_diff(&self) -> Result<String, GitError>;

    /// Unified diff of HEAD against its first parent.
    fn last_commit_diff(&self) -> Result<String, GitError>;

    /// Create a new commit from the index.
    fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Replace HEAD's message, leaving its content alone.
    fn amend_message(&self, message: &str) -> Result<(), GitError>;

    /// Push the current branch to its configured remote.
    fn push(&self) -> Result<(), GitError>;
}
