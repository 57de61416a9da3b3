//! Commit message generation with retry and sanitization.

use tracing::debug;

use crate::error::GeminiError;
use crate::retry::{RetryPolicy, retry_with_backoff};

use super::client::GenerationBackend;

const FENCE: &str = "```";

/// Generate a single-line commit message for `diff`.
///
/// Retries the backend according to `policy`, then sanitizes the text of the
/// first successful response. An empty result after sanitizing is a hard
/// failure and is not retried.
pub async fn generate_commit_message<B>(
    backend: &B,
    diff: &str,
    policy: &RetryPolicy,
) -> Result<String, GeminiError>
where
    B: GenerationBackend + ?Sized,
{
    let raw = retry_with_backoff(
        policy,
        || backend.generate(diff),
        |attempts, e| GeminiError::RetriesExhausted {
            attempts,
            source: Box::new(e),
        },
    )
    .await?;

    let message = sanitize_message(&raw);
    if message.is_empty() {
        debug!("Raw response: {:?}", raw);
        return Err(GeminiError::EmptyMessage);
    }

    Ok(message)
}

/// Reduce model output to one clean line.
///
/// Strips a leading and/or trailing triple-backtick fence, trims whitespace
/// and keeps only the first line. Applying it twice gives the same result as
/// applying it once.
pub fn sanitize_message(raw: &str) -> String {
    // Each pass returns a substring of its input, so this terminates.
    let mut current = sanitize_once(raw);
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix(FENCE) {
        text = skip_info_string(rest);
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }

    text.trim().lines().next().unwrap_or_default().trim().to_string()
}

/// Drop the language tag of an opening fence (```` ```text ````).
fn skip_info_string(rest: &str) -> &str {
    match rest.split_once('\n') {
        Some((info, body)) if is_info_string(info) => body,
        _ => rest,
    }
}

fn is_info_string(line: &str) -> bool {
    line.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}
