//! Configuration loader for environment variables and the config file.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the JSON config file.
//! - Provide a builder-style `ConfigLoader` that merges the layers.
//! - Enforce the `DOTENV_DISABLED` gate before any `.env` loading.
//!
//! Does NOT handle:
//! - Validating shortcut overrides (the dispatcher validates them when it builds its keymap).
//! - Writing configuration back to disk.
//!
//! Invariants / Assumptions:
//! - Precedence: explicit builder values > environment variables > config file > defaults.
//! - A missing file (or no config directory at all) at the default location means
//!   "all defaults"; a missing file at an explicitly requested path is an error.

mod env;
mod error;
mod path;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use path::default_config_path;

use crate::types::{Config, ConfigFile, Platform};

/// Builds a [`Config`] from the layered sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    platform: Option<Platform>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `.env` from the working directory, unless `DOTENV_DISABLED` is set.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if env::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read the config file from this path instead of the default location.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Force the platform used for shortcut labels.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Merge all layers into a resolved [`Config`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let (file, source_path) = match self
            .config_path
            .clone()
            .or_else(env::config_path_from_env)
        {
            Some(path) => (read_config_file(&path)?, Some(path)),
            None => read_default_config_file(default_config_path())?,
        };

        let platform = match self.platform {
            Some(platform) => platform,
            None => env::platform_from_env()?
                .or(file.platform)
                .unwrap_or_else(Platform::current),
        };

        Ok(Config {
            keybind_overrides: file.keybind_overrides,
            platform,
            source_path,
        })
    }
}

/// Read the optional file at the default location.
///
/// A missing file or an unresolvable config directory yields the defaults.
fn read_default_config_file(
    default_path: Result<PathBuf, ConfigError>,
) -> Result<(ConfigFile, Option<PathBuf>), ConfigError> {
    match default_path {
        Ok(path) if path.exists() => Ok((read_config_file(&path)?, Some(path))),
        Ok(path) => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok((ConfigFile::default(), None))
        }
        Err(e) => {
            tracing::debug!(error = %e, "No config directory, using defaults");
            Ok((ConfigFile::default(), None))
        }
    }
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}
