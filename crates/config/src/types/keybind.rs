//! Shortcut override types for StudySphere.
//!
//! Responsibilities:
//! - Define overridable shortcut action identifiers (`KeybindAction`).
//! - Define `KeybindOverrides` for user-defined shortcut customizations.
//!
//! Does NOT handle:
//! - Key-string parsing or validation (see `keybind` module at crate root).
//! - Runtime key event matching (see the shortcuts crate).
//!
//! Invariants:
//! - `KeybindAction` uses snake_case serialization for config file consistency.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.
//! - Only actions explicitly listed in overrides override the defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An overridable shortcut action identifier.
///
/// One variant per entry in the default shortcut table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Show the keyboard shortcuts overlay
    Help,
    /// Go to the dashboard view
    Dashboard,
    /// Go to the course list
    Courses,
    /// Go to the profile view
    Profile,
    /// Focus the search control (primary binding)
    Search,
    /// Focus the search control (single-key binding)
    QuickSearch,
    /// Close the help overlay and any open modal
    CloseOverlays,
    /// Move focus to the previous list item
    NavigateUp,
    /// Move focus to the next list item
    NavigateDown,
}

impl KeybindAction {
    /// Every action, in default table order.
    pub const ALL: [KeybindAction; 9] = [
        Self::Help,
        Self::Dashboard,
        Self::Courses,
        Self::Profile,
        Self::Search,
        Self::CloseOverlays,
        Self::QuickSearch,
        Self::NavigateUp,
        Self::NavigateDown,
    ];
}

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => write!(f, "help"),
            Self::Dashboard => write!(f, "dashboard"),
            Self::Courses => write!(f, "courses"),
            Self::Profile => write!(f, "profile"),
            Self::Search => write!(f, "search"),
            Self::QuickSearch => write!(f, "quick_search"),
            Self::CloseOverlays => write!(f, "close_overlays"),
            Self::NavigateUp => write!(f, "navigate_up"),
            Self::NavigateDown => write!(f, "navigate_down"),
        }
    }
}

/// User-defined shortcut overrides.
///
/// Maps action identifiers to key combinations. Only actions explicitly
/// listed here override the defaults; all others use built-in bindings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeybindOverrides {
    #[serde(default)]
    pub overrides: BTreeMap<KeybindAction, String>,
}

impl KeybindOverrides {
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Get the override for a specific action, if any.
    pub fn get(&self, action: KeybindAction) -> Option<&str> {
        self.overrides.get(&action).map(|s| s.as_str())
    }
}
