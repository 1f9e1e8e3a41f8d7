//! Actions flowing from the input task to the UI loop.

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A key press read from the terminal.
    Input(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// Leave the application.
    Quit,
}
