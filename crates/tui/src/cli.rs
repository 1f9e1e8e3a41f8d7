//! Command-line argument parsing for studysphere-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::startup`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use clap::Parser;
use std::path::PathBuf;
use studysphere_config::Platform;

/// Command-line arguments for studysphere-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --config-path, --platform)
/// 2. Environment variables (e.g., STUDYSPHERE_CONFIG_PATH, STUDYSPHERE_PLATFORM)
/// 3. Configuration file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "studysphere-tui",
    about = "Keyboard-driven terminal front end for StudySphere",
    version,
    after_help = "Examples:\n  studysphere-tui\n  studysphere-tui --platform mac\n  studysphere-tui --config-path ~/studysphere.json\n  studysphere-tui --log-dir /var/log/studysphere --metrics-bind 127.0.0.1:9090\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Platform used for shortcut labels (mac or other)
    #[arg(long)]
    pub platform: Option<Platform>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "127.0.0.1:9090")
    ///
    /// When enabled, exposes /metrics endpoint for Prometheus scraping.
    #[arg(long, env = "STUDYSPHERE_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}
