//! Error types for gemit modules using thiserror.

use thiserror::Error;

/// Errors from the startup dependency check.
#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("GEMINI_API_KEY is not set. Export your Gemini API key before running gemit.")]
    MissingApiKey,

    #[error("Required executable '{0}' was not found on PATH")]
    ToolNotFound(String),
}

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Bare repositories are not supported")]
    BareRepository,

    #[error("Repository has no commits yet")]
    NoCommits,

    #[error("The last commit has no parent. Regenerating a message needs at least two commits.")]
    NoParentCommit,

    #[error("Failed to collect diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed {
        operation: &'static str,
        stderr: String,
    },
}

/// Errors from the Gemini generation endpoint.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Request to Gemini failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Gemini returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Gemini returned invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Gemini response has no text at candidates[0].content.parts[0].text")]
    MissingText,

    #[error("All {attempts} attempts to reach Gemini failed")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<GeminiError>,
    },

    #[error("Gemini returned an empty commit message")]
    EmptyMessage,
}

/// Errors from changelog operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Failed to read changelog: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write changelog: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors surfaced by the commit driver.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("Failed to generate commit message")]
    Generation(#[from] GeminiError),

    #[error("Commit was created, but updating the changelog failed")]
    Changelog(#[from] ChangelogError),
}
