//! Startup wiring: configuration, keymap and the shortcut service.
//!
//! Responsibilities:
//! - Resolve configuration from CLI flags, environment, `.env` and the config file.
//! - Build the keymap with user overrides (falling back to defaults).
//! - Install the process-wide shortcut service.
//!
//! Does NOT handle:
//! - Terminal setup (see `runtime::terminal`).
//! - Logging setup (done in `main.rs` before anything here runs).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` runs before environment variables are read.
//! - Invalid overrides never prevent startup.

use anyhow::{Context, Result};
use studysphere_config::{Config, ConfigLoader};
use studysphere_shortcuts::{Keymap, ShortcutDispatcher, ShortcutService, service};

use crate::cli::Cli;

/// Load configuration with CLI overrides applied.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;

    if let Some(path) = &cli.config_path
        && !path.as_os_str().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(platform) = cli.platform {
        loader = loader.with_platform(platform);
    }

    let config = loader.build().context("Failed to load configuration")?;
    match &config.source_path {
        Some(path) => tracing::info!(path = %path.display(), platform = %config.platform, "Loaded configuration"),
        None => tracing::info!(platform = %config.platform, "Using default configuration"),
    }
    Ok(config)
}

/// Keymap for `config`: defaults with the user's overrides applied.
pub fn build_keymap(config: &Config) -> Keymap {
    Keymap::with_overrides_or_defaults(&config.keybind_overrides)
}

/// Install the process-wide shortcut service for `config`.
pub fn init_shortcuts(config: &Config) -> Result<ShortcutService> {
    let dispatcher = ShortcutDispatcher::new(build_keymap(config));
    service::init(dispatcher).context("Failed to start shortcut service")
}
