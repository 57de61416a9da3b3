//! gemit - A CLI tool that writes conventional commit messages with Gemini.
//!
//! # Overview
//!
//! gemit reads the staged diff (or the diff of the last commit), asks the
//! Gemini `generateContent` endpoint for a one-line Conventional Commits
//! message, and hands it to git. It can also add the message to a dated
//! CHANGELOG.md section and push the result.

pub mod changelog;
pub mod config;
pub mod driver;
pub mod error;
pub mod gemini;
pub mod git;
pub mod preflight;
pub mod retry;

// Re-export commonly used types
pub use config::Config;
pub use driver::{Outcome, RunOptions};
pub use error::{ChangelogError, DriverError, GeminiError, GitError, PreflightError};
pub use gemini::{GeminiClient, GenerationBackend};
pub use git::{GitRepo, VcsPort};
pub use retry::RetryPolicy;
