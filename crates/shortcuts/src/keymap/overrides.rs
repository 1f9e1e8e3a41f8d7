//! Shortcut override resolution.
//!
//! Bridges the config crate's `KeybindOverrides` with the crossterm-based
//! keymap. Converts parsed key strings into matchers and rebinds the
//! corresponding default bindings.
//!
//! Responsibilities:
//! - Convert config key strings into crossterm matchers.
//! - Build a keymap with overrides applied in place.
//! - Fall back to the defaults (with a warning) when overrides are invalid.
//!
//! Does NOT handle:
//! - Parsing key strings (handled by `studysphere_config::keybind`).
//! - Runtime rebinding (overrides are applied once, when the keymap is built).

use crossterm::event::{KeyCode, KeyModifiers};
use studysphere_config::KeybindOverrides;
use studysphere_config::keybind::{KeyCodeName, ModifierFlags, ParsedKey, parse_key};

use super::{Keymap, Matcher};
use crate::error::ShortcutError;

impl Keymap {
    /// Default keymap with the user's overrides applied.
    ///
    /// Overridden bindings keep their position in the table.
    ///
    /// # Errors
    ///
    /// Returns an error if any override fails validation (bad syntax,
    /// reserved key, or two actions on one key).
    pub fn with_overrides(overrides: &KeybindOverrides) -> Result<Self, ShortcutError> {
        studysphere_config::keybind::validate_overrides(&overrides.overrides)?;

        let mut bindings = Keymap::defaults().bindings;
        for binding in &mut bindings {
            let Some(action) = binding.action else {
                continue;
            };
            let Some(key_str) = overrides.get(action) else {
                continue;
            };
            let parsed = parse_key(key_str)?;
            binding.matcher = parsed_key_to_matcher(&parsed);
            tracing::debug!(%action, key = %binding.matcher, "Applied shortcut override");
        }

        Ok(Self::from_bindings(bindings))
    }

    /// Like [`Keymap::with_overrides`], but logs and returns the defaults on error.
    pub fn with_overrides_or_defaults(overrides: &KeybindOverrides) -> Self {
        if overrides.is_empty() {
            tracing::debug!("No shortcut overrides configured");
            return Self::defaults();
        }

        match Self::with_overrides(overrides) {
            Ok(keymap) => {
                tracing::info!("Loaded {} shortcut override(s)", overrides.overrides.len());
                keymap
            }
            Err(e) => {
                tracing::warn!("{}. Using default shortcuts.", e);
                Self::defaults()
            }
        }
    }
}

/// Converts a parsed key from config into a matcher.
///
/// crossterm reports shifted letters in upper case, so `Shift+d` becomes
/// `Char('D')` with SHIFT.
fn parsed_key_to_matcher(parsed: &ParsedKey) -> Matcher {
    let code = match &parsed.code {
        KeyCodeName::Char(c) if parsed.modifiers.shift && c.is_ascii_alphabetic() => {
            KeyCode::Char(c.to_ascii_uppercase())
        }
        KeyCodeName::Char(c) => KeyCode::Char(*c),
        KeyCodeName::F(n) => KeyCode::F(*n),
        KeyCodeName::Esc => KeyCode::Esc,
        KeyCodeName::Enter => KeyCode::Enter,
        KeyCodeName::Space => KeyCode::Char(' '),
        KeyCodeName::Tab => KeyCode::Tab,
        KeyCodeName::BackTab => KeyCode::BackTab,
        KeyCodeName::Backspace => KeyCode::Backspace,
        KeyCodeName::Delete => KeyCode::Delete,
        KeyCodeName::Insert => KeyCode::Insert,
        KeyCodeName::Home => KeyCode::Home,
        KeyCodeName::End => KeyCode::End,
        KeyCodeName::PageUp => KeyCode::PageUp,
        KeyCodeName::PageDown => KeyCode::PageDown,
        KeyCodeName::Up => KeyCode::Up,
        KeyCodeName::Down => KeyCode::Down,
        KeyCodeName::Left => KeyCode::Left,
        KeyCodeName::Right => KeyCode::Right,
    };

    Matcher::new(code, modifier_flags_to_crossterm(&parsed.modifiers))
}

fn modifier_flags_to_crossterm(flags: &ModifierFlags) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if flags.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if flags.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    if flags.alt {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}
