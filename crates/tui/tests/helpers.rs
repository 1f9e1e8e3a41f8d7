//! Test helpers for driving the TUI.
//!
//! Provides key-event constructors and a harness that renders the app into a
//! ratatui `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use studysphere_config::Platform;
use studysphere_shortcuts::{ShortcutDispatcher, ShortcutService};
use studysphere_tui::App;

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    code(KeyCode::Esc)
}

pub fn enter_key() -> KeyEvent {
    code(KeyCode::Enter)
}

pub fn tab_key() -> KeyEvent {
    code(KeyCode::Tab)
}

pub fn up_key() -> KeyEvent {
    code(KeyCode::Up)
}

pub fn down_key() -> KeyEvent {
    code(KeyCode::Down)
}

/// App on a standalone shortcut service, so tests never touch the global one.
pub fn new_app(platform: Platform) -> App {
    let shortcuts = ShortcutService::new(ShortcutDispatcher::default());
    App::new(&shortcuts, platform).expect("listener mounts on a fresh service")
}

/// Type a string one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_input(key(c));
    }
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_platform(width, height, Platform::Other)
    }

    pub fn with_platform(width: u16, height: u16, platform: Platform) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self {
            app: new_app(platform),
            terminal,
        }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
