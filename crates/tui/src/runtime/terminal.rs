//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, and ask the terminal to report
//!   modifier keys unambiguously where it can.
//! - Restore terminal state on exit, even during panics, via `Drop`.
//!
//! Does NOT handle:
//! - Reading input events (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};

/// Guard that sets the terminal up on creation and restores it on drop.
pub struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// Without keyboard enhancement, legacy terminals report `Ctrl+h` as
    /// Backspace, so the flags are pushed whenever the terminal supports them.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, an early return drops the guard and undoes the setup.
        let mut guard = Self {
            keyboard_enhanced: false,
        };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            guard.keyboard_enhanced = true;
        }
        tracing::info!(
            keyboard_enhanced = guard.keyboard_enhanced,
            "Terminal initialized"
        );

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: this also runs while unwinding.
        let mut stdout = io::stdout();
        if self.keyboard_enhanced {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
