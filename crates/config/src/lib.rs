//! Configuration management for StudySphere.
//!
//! This crate provides key-string parsing for keyboard shortcuts, the
//! overridable shortcut action identifiers, and a loader that merges the
//! JSON config file with environment variables.

pub mod keybind;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, default_config_path};
pub use types::{Config, ConfigFile, KeybindAction, KeybindOverrides, Platform};
