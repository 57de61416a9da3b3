//! Apply a changelog entry to a file on disk.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use chrono::Local;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ChangelogError;

use super::format::{CHANGELOG_TITLE, insert_entry};

/// What [`update_changelog`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogUpdate {
    /// The entry was written.
    Updated,
    /// The file does not exist and creating it was not requested.
    Skipped,
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Add `message` under the `date` heading of the changelog at `path`.
///
/// - Missing file and `create_if_missing` unset: nothing happens.
/// - Missing file and `create_if_missing` set: starts from a `# Changelog` title.
/// - The new content is written to a temp file in the same directory, which
///   then replaces the original in one rename.
pub fn update_changelog(
    path: &Path,
    message: &str,
    create_if_missing: bool,
    date: &str,
) -> Result<ChangelogUpdate, ChangelogError> {
    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if !create_if_missing {
                debug!("{} not found, skipping changelog update", path.display());
                return Ok(ChangelogUpdate::Skipped);
            }
            format!("{CHANGELOG_TITLE}\n")
        }
        Err(e) => return Err(ChangelogError::ReadFailed(e)),
    };

    let updated = insert_entry(&existing, date, message);
    write_atomically(path, &updated)?;

    Ok(ChangelogUpdate::Updated)
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ChangelogError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(ChangelogError::WriteFailed)?;
    tmp.write_all(content.as_bytes())
        .map_err(ChangelogError::WriteFailed)?;
    tmp.as_file()
        .sync_all()
        .map_err(ChangelogError::WriteFailed)?;
    tmp.persist(path)
        .map_err(|e| ChangelogError::WriteFailed(e.error))?;

    Ok(())
}
