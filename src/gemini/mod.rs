//! Gemini integration: request payload, HTTP backend and message generation.

pub mod client;
pub mod message;
pub mod prompt;

pub use client::{GeminiClient, GenerationBackend, extract_text};
pub use message::{generate_commit_message, sanitize_message};
pub use prompt::{GenerateContentRequest, SYSTEM_INSTRUCTION, build_request};
