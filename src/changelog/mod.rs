//! Changelog editing: pure insertion plus atomic file replacement.

pub mod format;
pub mod writer;

pub use format::{CHANGELOG_TITLE, date_heading, insert_entry};
pub use writer::{ChangelogUpdate, today, update_changelog};
