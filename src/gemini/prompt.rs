//! Request payload for the `generateContent` endpoint.

use serde::Serialize;

/// Fixed instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a senior software engineer who writes precise, professional git commit messages. \
You will receive the unified diff of a change set. Reply with exactly ONE line: the commit \
message for that diff, following the Conventional Commits specification.

Rules:
- Start with an uppercase type tag: FEAT, FIX, REFACTOR, DOCS, STYLE, TEST, PERF, BUILD, CI or CHORE.
- Optionally add a scope in parentheses right after the type, e.g. FIX(parser).
- Follow the type with a colon, a space, and a concise summary in the imperative mood.
- Describe the most important change; do not list every file.
- Do not use markdown, code fences, quotes, bullet points or trailing punctuation.
- Output only the single commit message line and nothing else.";

/// Text placed before the diff in the user turn.
pub const DIFF_PREFIX: &str = "Here is the diff:\n\n";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Content {
    fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part { text: text.into() }],
        }
    }
}

/// Build the request body for one diff.
///
/// The diff is sent whole; nothing is truncated.
pub fn build_request(
    system_instruction: &str,
    diff: &str,
    temperature: f32,
    max_output_tokens: u32,
) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: Content::text(system_instruction),
        contents: vec![Content::text(format!("{DIFF_PREFIX}{diff}"))],
        generation_config: GenerationConfig {
            temperature,
            max_output_tokens,
        },
    }
}
