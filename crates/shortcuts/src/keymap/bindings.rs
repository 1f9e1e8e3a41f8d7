//! Default StudySphere shortcut table.
//!
//! Invariants:
//! - Declaration order is the match order and the help overlay order.
//! - No two default bindings share a key and modifier set.

use crossterm::event::KeyCode;
use studysphere_config::KeybindAction;

use super::{Command, Keybinding, Matcher, Section};
use crate::focus::Direction;
use crate::route::Route;

pub(super) fn all() -> Vec<Keybinding> {
    vec![
        Keybinding::new(
            Section::General,
            "Show keyboard shortcuts help",
            Matcher::ctrl('h'),
            Command::ShowHelp,
        )
        .with_action(KeybindAction::Help),
        Keybinding::new(
            Section::Navigation,
            "Go to Dashboard",
            Matcher::ctrl('d'),
            Command::Navigate(Route::Dashboard),
        )
        .with_action(KeybindAction::Dashboard),
        Keybinding::new(
            Section::Navigation,
            "Go to My Courses",
            Matcher::ctrl('c'),
            Command::Navigate(Route::Courses),
        )
        .with_action(KeybindAction::Courses),
        Keybinding::new(
            Section::Navigation,
            "Go to Profile",
            Matcher::ctrl('p'),
            Command::Navigate(Route::Profile),
        )
        .with_action(KeybindAction::Profile),
        Keybinding::new(
            Section::Search,
            "Search (focus search bar)",
            Matcher::ctrl('s'),
            Command::FocusSearch,
        )
        .with_action(KeybindAction::Search),
        Keybinding::new(
            Section::General,
            "Close modals/overlays",
            Matcher::plain(KeyCode::Esc),
            Command::CloseOverlays,
        )
        .with_action(KeybindAction::CloseOverlays),
        Keybinding::new(
            Section::Search,
            "Quick search",
            Matcher::plain(KeyCode::Char('/')),
            Command::FocusSearch,
        )
        .with_action(KeybindAction::QuickSearch),
        Keybinding::new(
            Section::Lists,
            "Navigate up in lists",
            Matcher::plain(KeyCode::Up),
            Command::FocusSibling(Direction::Previous),
        )
        .with_action(KeybindAction::NavigateUp),
        Keybinding::new(
            Section::Lists,
            "Navigate down in lists",
            Matcher::plain(KeyCode::Down),
            Command::FocusSibling(Direction::Next),
        )
        .with_action(KeybindAction::NavigateDown),
    ]
}
