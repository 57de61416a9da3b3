//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use git2::{Oid, Repository, Signature};

use gemit::Config;
use gemit::retry::RetryPolicy;

/// Create a temporary directory for test output.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Config pointing at a mock server, with short backoff so tests stay fast.
pub fn test_config(api_base: &str, changelog_path: PathBuf) -> Config {
    Config {
        api_key: "test-key".to_string(),
        api_base: api_base.to_string(),
        changelog_path,
        retry: RetryPolicy {
            max_attempts: 3,
            initial_interval: std::time::Duration::from_millis(10),
        },
        ..Config::default()
    }
}

/// A `generateContent` response carrying `text` as the first candidate.
pub fn gemini_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository with a local identity, so the git
    /// CLI can commit without touching the user's global config.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config.set_str("user.name", "Test User").expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get the test signature for commits.
    fn signature(&self) -> Signature<'_> {
        Signature::now("Test User", "test@example.com").expect("Failed to create signature")
    }

    /// Write a file in the work tree without staging it.
    pub fn write(&self, name: &str, content: &str) {
        std::fs::write(self.path().join(name), content).expect("Failed to write test file");
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        self.write(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Commit the current index. Returns the commit OID.
    pub fn commit(&self, message: &str) -> Oid {
        let sig = self.signature();

        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        // Get parent commit if exists
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Stage a file and commit it in one go.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> Oid {
        self.stage(name, content);
        self.commit(message)
    }

    pub fn head_oid(&self) -> Oid {
        self.repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD")
            .id()
    }

    /// HEAD's message without the trailing newline git adds.
    pub fn head_message(&self) -> String {
        let commit = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        commit.message().unwrap_or_default().trim_end().to_string()
    }

    /// Number of commits reachable from HEAD.
    pub fn commit_count(&self) -> usize {
        let mut walk = self.repo.revwalk().expect("Failed to create revwalk");
        walk.push_head().expect("Failed to push HEAD");
        walk.count()
    }

    /// Whether HEAD's tree contains `name`.
    pub fn head_has_file(&self, name: &str) -> bool {
        let tree = self
            .repo
            .head()
            .and_then(|h| h.peel_to_tree())
            .expect("Failed to resolve HEAD tree");
        tree.get_path(Path::new(name)).is_ok()
    }

    pub fn branch_name(&self) -> String {
        self.repo
            .head()
            .ok()
            .and_then(|h| h.shorthand().map(|s| s.to_string()))
            .unwrap_or_else(|| "master".to_string())
    }

    /// Create a bare `origin` and make the current branch track it.
    ///
    /// Call after the first commit so the branch name is known.
    pub fn add_bare_remote(&self) -> (tempfile::TempDir, Repository) {
        let remote_dir = tempfile::tempdir().expect("Failed to create remote dir");
        let remote = Repository::init_bare(remote_dir.path()).expect("Failed to init bare repo");

        self.repo
            .remote(
                "origin",
                remote_dir.path().to_str().expect("Invalid remote path"),
            )
            .expect("Failed to add origin remote");

        let branch = self.branch_name();
        let mut config = self.repo.config().expect("Failed to open repo config");
        config
            .set_str(&format!("branch.{}.remote", branch), "origin")
            .expect("Failed to set branch remote");
        config
            .set_str(
                &format!("branch.{}.merge", branch),
                &format!("refs/heads/{}", branch),
            )
            .expect("Failed to set branch merge");

        (remote_dir, remote)
    }
}
