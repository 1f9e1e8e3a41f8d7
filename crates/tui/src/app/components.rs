//! Text-entry controls built on tui-input and tui-textarea.
//!
//! These receive keys only after the shortcut dispatcher has ignored them,
//! so every key they see is ordinary text editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, style::Style, widgets::Block};
use tui_input::{Input, InputRequest};

/// Single-line input used by the header search box.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
    placeholder: Option<String>,
}

impl SingleLineInput {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: Some(placeholder.into()),
        }
    }

    /// Apply one editing key. Returns whether the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.input.value().to_string();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return self.input.value() != before;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };
        if let Some(r) = req {
            self.input.handle(r);
        }

        self.input.value() != before
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor column in terminal cells, so wide glyphs count double.
    pub fn cursor_position(&self) -> usize {
        self.input.visual_cursor()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}

/// Multi-line textarea used by the profile bio.
pub struct MultiLineInput<'a> {
    textarea: tui_textarea::TextArea<'a>,
}

impl<'a> MultiLineInput<'a> {
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_placeholder_text(placeholder);
        Self { textarea }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.textarea.input(key);
    }

    /// Lines joined with `\n`.
    pub fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|line| line.is_empty())
    }

    pub fn set_block(&mut self, block: Block<'a>) {
        self.textarea.set_block(block);
    }

    pub fn set_cursor_style(&mut self, style: Style) {
        self.textarea.set_cursor_style(style);
    }
}

impl Default for MultiLineInput<'_> {
    fn default() -> Self {
        Self {
            textarea: tui_textarea::TextArea::default(),
        }
    }
}

impl ratatui::widgets::Widget for &MultiLineInput<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        ratatui::widgets::Widget::render(&self.textarea, area, buf);
    }
}

/// Fixed-option selector, like a `<select>` element.
///
/// Arrow keys change the selection instead of moving focus.
#[derive(Debug, Clone)]
pub struct SelectInput {
    options: &'static [&'static str],
    selected: usize,
}

impl SelectInput {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    /// Returns whether the selection changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let last = self.options.len().saturating_sub(1);
        let next = match key.code {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Right => (self.selected + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.selected,
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&'static str> {
        self.options.get(self.selected).copied()
    }
}
