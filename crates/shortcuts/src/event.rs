//! Keyboard input events as seen by the dispatcher.
//!
//! Responsibilities:
//! - Pair a crossterm `KeyEvent` with the kind of element that has focus.
//! - Classify focus targets into text-entry controls and everything else.
//!
//! Invariants:
//! - `TextInput`, `TextArea` and `Select` are text-entry controls; nothing else is.

use crossterm::event::{KeyEvent, KeyEventKind};

/// The element a keyboard event is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventTarget {
    /// Any non-text element (a list item, a button, the page itself).
    #[default]
    Element,
    /// Single-line text input.
    TextInput,
    /// Multi-line text input.
    TextArea,
    /// Selection control.
    Select,
}

impl EventTarget {
    /// Whether typed keys belong to this control rather than to shortcuts.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea | Self::Select)
    }
}

/// A key press together with its focus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyEvent,
    pub target: EventTarget,
}

impl InputEvent {
    pub fn new(key: KeyEvent, target: EventTarget) -> Self {
        Self { key, target }
    }

    /// Event delivered to a non-text element.
    pub fn on_element(key: KeyEvent) -> Self {
        Self::new(key, EventTarget::Element)
    }

    /// Key releases never trigger shortcuts.
    pub fn is_press(&self) -> bool {
        self.key.kind != KeyEventKind::Release
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn text_entry_targets() {
        assert!(!EventTarget::Element.is_text_entry());
        assert!(EventTarget::TextInput.is_text_entry());
        assert!(EventTarget::TextArea.is_text_entry());
        assert!(EventTarget::Select.is_text_entry());
    }

    #[test]
    fn release_is_not_a_press() {
        let press = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('d'),
            KeyModifiers::CONTROL,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert!(InputEvent::on_element(press).is_press());
        assert!(!InputEvent::on_element(release).is_press());
    }
}
