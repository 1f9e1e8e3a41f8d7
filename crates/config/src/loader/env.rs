//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::types::Platform;

pub const CONFIG_PATH_VAR: &str = "STUDYSPHERE_CONFIG_PATH";
pub const PLATFORM_VAR: &str = "STUDYSPHERE_PLATFORM";
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn config_path_from_env() -> Option<PathBuf> {
    env_var_or_none(CONFIG_PATH_VAR).map(PathBuf::from)
}

pub fn platform_from_env() -> Result<Option<Platform>, ConfigError> {
    env_var_or_none(PLATFORM_VAR)
        .map(|value| {
            value.parse().map_err(|message| ConfigError::InvalidValue {
                var: PLATFORM_VAR.to_string(),
                message,
            })
        })
        .transpose()
}

/// `DOTENV_DISABLED=1` (or `true`) skips `.env` loading.
pub fn dotenv_disabled() -> bool {
    env_var_or_none(DOTENV_DISABLED_VAR)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
