//! Dependency checks run before anything else.

use tracing::debug;

use crate::config::Config;
use crate::error::PreflightError;

/// Verify the API key is set and every required executable is on PATH.
///
/// Stops at the first missing dependency.
pub fn check_dependencies(config: &Config) -> Result<(), PreflightError> {
    check_api_key(&config.api_key)?;

    for tool in &config.required_tools {
        check_tool_installed(tool)?;
    }

    Ok(())
}

fn check_api_key(api_key: &str) -> Result<(), PreflightError> {
    if api_key.trim().is_empty() {
        return Err(PreflightError::MissingApiKey);
    }
    Ok(())
}

/// Uses the `which` crate for cross-platform executable detection.
fn check_tool_installed(tool: &str) -> Result<(), PreflightError> {
    match which::which(tool) {
        Ok(path) => {
            debug!("Found {} at {}", tool, path.display());
            Ok(())
        }
        Err(_) => Err(PreflightError::ToolNotFound(tool.to_string())),
    }
}
