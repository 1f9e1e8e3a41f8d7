//! Shortcut binding table and matcher.
//!
//! Responsibilities:
//! - Define the single source of truth for shortcut bindings and their descriptions.
//! - Resolve key events to the first matching binding.
//!
//! Non-responsibilities:
//! - Executing commands (see `dispatcher`).
//! - Deciding whether the focus target accepts text (see `dispatcher`).
//!
//! Invariants:
//! - Bindings are scanned in declaration order and the first match wins.
//! - Modifier matching is exact over {ctrl, shift, alt}; meta and super count as ctrl.
//! - A `Keymap` is never mutated after construction.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use studysphere_config::KeybindAction;

use crate::focus::Direction;
use crate::route::Route;

mod bindings;
pub mod overrides;

/// Help overlay grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    General,
    Navigation,
    Search,
    Lists,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Navigation => "Navigation",
            Self::Search => "Search",
            Self::Lists => "Lists",
        }
    }
}

/// What a binding does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show the help overlay.
    ShowHelp,
    /// Ask the router for a view.
    Navigate(Route),
    /// Focus the first search control.
    FocusSearch,
    /// Hide the help overlay and activate every modal-close control.
    CloseOverlays,
    /// Move focus to a sibling of the focused element.
    FocusSibling(Direction),
}

impl Command {
    /// Stable name used for log fields and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Self::ShowHelp => "show_help",
            Self::Navigate(Route::Dashboard) => "navigate_dashboard",
            Self::Navigate(Route::Courses) => "navigate_courses",
            Self::Navigate(Route::Profile) => "navigate_profile",
            Self::FocusSearch => "focus_search",
            Self::CloseOverlays => "close_overlays",
            Self::FocusSibling(Direction::Previous) => "focus_previous",
            Self::FocusSibling(Direction::Next) => "focus_next",
        }
    }
}

/// The modifiers that take part in matching.
const MATCHED_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL
    .union(KeyModifiers::SHIFT)
    .union(KeyModifiers::ALT);

/// Fold meta/super into ctrl and drop modifiers that never take part in matching.
pub fn normalize_modifiers(modifiers: KeyModifiers) -> KeyModifiers {
    let mut normalized = modifiers & MATCHED_MODIFIERS;
    if modifiers.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        normalized |= KeyModifiers::CONTROL;
    }
    normalized
}

/// Key plus exact modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matcher {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Matcher {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self {
            code,
            modifiers: normalize_modifiers(modifiers),
        }
    }

    /// Key with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && normalize_modifiers(key.modifiers) == self.modifiers
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("Alt+")?;
        }
        f.write_str(&key_name(self.code))
    }
}

/// Browser-style name for a key code (`Escape`, `ArrowUp`, `Space`).
pub fn key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        other => format!("{other:?}"),
    }
}

/// One shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub section: Section,
    pub description: &'static str,
    pub matcher: Matcher,
    pub command: Command,
    /// Config identifier; `None` for bindings that cannot be overridden.
    pub action: Option<KeybindAction>,
}

impl Keybinding {
    pub fn new(
        section: Section,
        description: &'static str,
        matcher: Matcher,
        command: Command,
    ) -> Self {
        Self {
            section,
            description,
            matcher,
            command,
            action: None,
        }
    }

    pub fn with_action(mut self, action: KeybindAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.matcher.matches(key)
    }
}

/// Ordered, immutable binding table.
///
/// Duplicate key/modifier signatures are accepted as-is; only the first of
/// them can ever fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
}

impl Keymap {
    /// The StudySphere default shortcuts.
    pub fn defaults() -> Self {
        Self::from_bindings(bindings::all())
    }

    pub fn from_bindings(bindings: Vec<Keybinding>) -> Self {
        Self { bindings }
    }

    /// First binding matching the key, in declaration order.
    pub fn resolve(&self, key: &KeyEvent) -> Option<&Keybinding> {
        self.bindings.iter().find(|binding| binding.matches(key))
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Binding registered for a config action, if any.
    pub fn binding_for(&self, action: KeybindAction) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.action == Some(action))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::defaults()
    }
}
