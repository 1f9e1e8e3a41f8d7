//! Configuration type definitions for StudySphere.
//!
//! Responsibilities:
//! - Define the on-disk config file shape (`ConfigFile`) and the resolved `Config`.
//! - Define the platform used for shortcut labels.
//! - Re-export shortcut override types.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Key-string parsing or validation (see `keybind` module at crate root).
//!
//! Invariants:
//! - Every `ConfigFile` field has a serde default, so an empty `{}` file is valid.

pub mod keybind;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use keybind::{KeybindAction, KeybindOverrides};

/// Platform family, used to label the primary modifier in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// macOS: the primary modifier is shown as `⌘`.
    Mac,
    /// Everything else: the primary modifier is shown as `Ctrl`.
    Other,
}

impl Platform {
    /// Platform of the running binary.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Other
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mac => write!(f, "mac"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mac" | "macos" | "darwin" => Ok(Self::Mac),
            "other" | "linux" | "windows" | "pc" => Ok(Self::Other),
            other => Err(format!(
                "unknown platform '{other}', expected 'mac' or 'other'"
            )),
        }
    }
}

/// Config file contents as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub keybind_overrides: KeybindOverrides,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

/// Fully resolved configuration handed to the front end.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub keybind_overrides: KeybindOverrides,
    pub platform: Platform,
    /// Config file the values came from, if one was read.
    pub source_path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("mac".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!(" MacOS ".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Other);
        assert!("amiga".parse::<Platform>().is_err());
    }

    #[test]
    fn test_empty_config_file_parses() {
        let file: ConfigFile = serde_json::from_str("{}").unwrap();
        assert!(file.keybind_overrides.is_empty());
        assert!(file.platform.is_none());
    }

    #[test]
    fn test_config_file_with_overrides() {
        let json = r#"{
            "keybind_overrides": { "overrides": { "help": "F1", "quick_search": "?" } },
            "platform": "mac"
        }"#;
        let file: ConfigFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.platform, Some(Platform::Mac));
        assert_eq!(file.keybind_overrides.get(KeybindAction::Help), Some("F1"));
        assert_eq!(
            file.keybind_overrides.get(KeybindAction::QuickSearch),
            Some("?")
        );
    }
}
