//! Changelog text layout and entry insertion.
//!
//! Layout:
//!
//! ```text
//! # Changelog
//!
//! ## 2024-05-02
//! - FEAT: newest entry of the day
//! - FIX: older entry of the day
//!
//! ## 2024-05-01
//! - DOCS: something from yesterday
//! ```

/// Title line written at the top of new changelogs.
pub const CHANGELOG_TITLE: &str = "# Changelog";

/// Prefix of a date section heading.
pub const DATE_HEADING_PREFIX: &str = "## ";

/// Heading line for `date` (`YYYY-MM-DD`).
pub fn date_heading(date: &str) -> String {
    format!("{DATE_HEADING_PREFIX}{date}")
}

/// Insert `message` as a bullet under the heading for `date`.
///
/// - heading already present: bullet goes directly below it, so the newest
///   entry of the day comes first;
/// - otherwise, title present: blank line, heading and bullet go directly
///   after the first title line;
/// - otherwise: heading and bullet are prepended as a new block.
///
/// The result always ends with a single newline.
pub fn insert_entry(document: &str, date: &str, message: &str) -> String {
    let heading = date_heading(date);
    let bullet = format!("- {message}");

    let mut lines: Vec<&str> = document.lines().collect();

    if let Some(idx) = lines.iter().position(|line| *line == heading) {
        lines.insert(idx + 1, &bullet);
    } else if let Some(idx) = lines.iter().position(|line| *line == CHANGELOG_TITLE) {
        lines.splice(idx + 1..idx + 1, ["", heading.as_str(), bullet.as_str()]);
    } else if lines.iter().all(|line| line.trim().is_empty()) {
        lines = vec![heading.as_str(), bullet.as_str()];
    } else {
        lines.splice(0..0, [heading.as_str(), bullet.as_str(), ""]);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}
