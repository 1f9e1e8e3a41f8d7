//! StudySphere TUI - keyboard-driven terminal front end.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, metrics, configuration and the shortcut service.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Shortcut matching (see `studysphere_shortcuts`).
//! - Configuration file format (see `studysphere_config`).
//!
//! Invariants:
//! - Logs go to a rolling file, never to the terminal the UI draws on.
//! - The shortcut service is installed before the app mounts its listener and
//!   shut down after the app is dropped.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use studysphere_shortcuts::service;
use studysphere_tui::cli::Cli;
use studysphere_tui::metrics_exporter::MetricsExporter;
use studysphere_tui::runtime::{startup, terminal::TerminalGuard};
use studysphere_tui::{Action, App};

/// Bounded so a stalled UI applies backpressure to the input task.
const ACTION_CHANNEL_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "studysphere-tui.log");
    // The guard flushes buffered logs when main returns.
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let metrics_exporter = match cli.metrics_bind.as_deref() {
        Some(bind_addr) => match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        },
        None => None,
    };

    let metrics_enabled = metrics_exporter.is_some();

    let config = startup::load_config(&cli)?;
    let shortcuts = startup::init_shortcuts(&config)?;
    let mut app = App::new(&shortcuts, config.platform)?;
    let mut help_changes = shortcuts.subscribe_help();

    let terminal_guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(ACTION_CHANNEL_CAPACITY);
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!("Terminal event stream failed: {}", e);
                    break;
                }
            };
            if tx.send(action).await.is_err() {
                break;
            }
        }
    });

    loop {
        let render_start = std::time::Instant::now();
        terminal.draw(|f| app.render(f))?;
        if metrics_enabled {
            metrics::histogram!("studysphere_tui_frame_render_duration_seconds")
                .record(render_start.elapsed().as_secs_f64());
        }

        tokio::select! {
            Some(action) = rx.recv() => {
                if matches!(app.update(action), Some(Action::Quit)) {
                    tracing::info!("Quit requested");
                    break;
                }
            }
            changed = help_changes.changed() => {
                if changed.is_err() {
                    break;
                }
                tracing::debug!(state = ?*help_changes.borrow_and_update(), "Help overlay redraw");
            }
            else => break,
        }
    }

    input_task.abort();
    drop(app);
    drop(terminal_guard);
    service::shutdown()?;
    Ok(())
}
