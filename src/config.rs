//! Run configuration, built once at startup and passed by reference.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::gemini::prompt::SYSTEM_INSTRUCTION;
use crate::retry::RetryPolicy;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the model name.
pub const MODEL_ENV_VAR: &str = "GEMIT_MODEL";

/// Environment variable overriding the API base URL.
pub const API_BASE_ENV_VAR: &str = "GEMIT_API_BASE";

/// Environment variable setting an HTTP request timeout, in seconds.
pub const TIMEOUT_ENV_VAR: &str = "GEMIT_TIMEOUT";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

const DEFAULT_TEMPERATURE: f32 = 0.5;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 100;

/// Everything a run needs to know that does not come from the diff itself.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub system_instruction: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub retry: RetryPolicy,
    /// Executables that must resolve on PATH before anything runs.
    pub required_tools: Vec<String>,
    pub changelog_path: PathBuf,
    /// `None` keeps the HTTP client's default behaviour.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            retry: RetryPolicy::default(),
            required_tools: vec!["git".to_string()],
            changelog_path: PathBuf::from(DEFAULT_CHANGELOG),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// Empty override variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: env::var(API_KEY_ENV_VAR).unwrap_or_default(),
            model: non_empty_var(MODEL_ENV_VAR).unwrap_or(defaults.model),
            api_base: non_empty_var(API_BASE_ENV_VAR).unwrap_or(defaults.api_base),
            request_timeout: get_timeout(),
            ..defaults
        }
    }

    /// Use a different changelog file.
    pub fn with_changelog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.changelog_path = path.into();
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Read the request timeout from `GEMIT_TIMEOUT`.
///
/// Logs a warning and keeps the client default if the value is not a whole
/// number of seconds.
fn get_timeout() -> Option<Duration> {
    let value = non_empty_var(TIMEOUT_ENV_VAR)?;
    match value.parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!(
                "Invalid {} value '{}', using the HTTP client default",
                TIMEOUT_ENV_VAR, value
            );
            None
        }
    }
}
