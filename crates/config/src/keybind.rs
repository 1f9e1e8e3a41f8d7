//! Shortcut key-string parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings (`Ctrl+h`, `Esc`, `ArrowUp`, `/`) into structured form.
//! - Validate a set of shortcut overrides for conflicts, reserved keys and bad syntax.
//!
//! Does NOT handle:
//! - Conversion into crossterm key events (that's in the shortcuts crate).
//! - Runtime key event matching.
//!
//! Invariants:
//! - `Cmd`, `Meta` and `Super` parse as ctrl; the dispatcher treats the platform
//!   meta key as the primary modifier everywhere.
//! - Modifier names are case-insensitive, single character keys are case-sensitive.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindAction;

/// Errors that can occur when parsing or validating shortcut overrides.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    #[error("Invalid key syntax: '{key}'. Expected format like 'h', 'Ctrl+h', 'Cmd+d', 'Esc', 'F1'")]
    InvalidSyntax { key: String },

    #[error("Unknown key name: '{name}'")]
    UnknownKey { name: String },

    #[error("Conflicting shortcuts: '{key}' is assigned to both {action1} and {action2}")]
    Conflict {
        key: String,
        action1: String,
        action2: String,
    },

    #[error("Reserved shortcut: '{key}' cannot be overridden")]
    ReservedKey { key: String },
}

/// A parsed key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    pub code: KeyCodeName,
    pub modifiers: ModifierFlags,
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers == ModifierFlags::default() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}+{}", self.modifiers, self.code)
        }
    }
}

/// Key names accepted in override strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    /// A character key (e.g., 'h', '/', '?')
    Char(char),
    /// Function key F1-F20
    F(u8),
    Esc,
    Enter,
    Space,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
///
/// There is no meta flag: meta parses into `ctrl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Parse a key string like "Ctrl+h", "Cmd+d", "Esc" or "/" into structured form.
///
/// # Examples
///
/// ```
/// use studysphere_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Cmd+d").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Char('d')));
/// assert!(key.modifiers.ctrl);
///
/// let key = parse_key("ArrowUp").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Up));
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    // "+" alone, or a trailing "++", names the plus key itself
    let (modifier_part, plus_key) = match key_str.strip_suffix("++") {
        Some(rest) => (rest, true),
        None if key_str == "+" => ("", true),
        None => (key_str, false),
    };

    let mut modifiers = ModifierFlags::default();
    let mut key_name = if plus_key { "+" } else { "" };

    let parts = modifier_part
        .split('+')
        .map(str::trim)
        .filter(|part| !(plus_key && part.is_empty()));

    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "cmd" | "command" | "meta" | "super" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            _ => {
                if key_name.is_empty() {
                    key_name = part;
                } else {
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = parse_key_code(key_name)?;

    let code = if matches!(code, KeyCodeName::Tab) && modifiers.shift {
        KeyCodeName::BackTab
    } else {
        code
    };

    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCodeName::Esc),
        "enter" | "return" => return Ok(KeyCodeName::Enter),
        "space" => return Ok(KeyCodeName::Space),
        "tab" => return Ok(KeyCodeName::Tab),
        "backtab" => return Ok(KeyCodeName::BackTab),
        "backspace" => return Ok(KeyCodeName::Backspace),
        "delete" | "del" => return Ok(KeyCodeName::Delete),
        "insert" | "ins" => return Ok(KeyCodeName::Insert),
        "home" => return Ok(KeyCodeName::Home),
        "end" => return Ok(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(KeyCodeName::PageDown),
        "up" | "arrowup" => return Ok(KeyCodeName::Up),
        "down" | "arrowdown" => return Ok(KeyCodeName::Down),
        "left" | "arrowleft" => return Ok(KeyCodeName::Left),
        "right" | "arrowright" => return Ok(KeyCodeName::Right),
        _ => {}
    }

    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCodeName::Char(c));
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

/// Shortcuts the terminal front end keeps for itself: suspend and quit.
pub const RESERVED_KEYS: &[&str] = &["ctrl+z", "ctrl+q"];

/// Validate a set of shortcut overrides.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use studysphere_config::keybind::validate_overrides;
/// use studysphere_config::KeybindAction;
///
/// let mut overrides = BTreeMap::new();
/// overrides.insert(KeybindAction::Help, "F1".to_string());
/// overrides.insert(KeybindAction::Dashboard, "Alt+d".to_string());
///
/// assert!(validate_overrides(&overrides).is_ok());
/// ```
pub fn validate_overrides(overrides: &BTreeMap<KeybindAction, String>) -> Result<(), KeybindError> {
    let mut key_to_action: HashMap<ParsedKey, KeybindAction> = HashMap::new();

    for (action, key_str) in overrides {
        let parsed = parse_key(key_str).map_err(|e| KeybindError::InvalidSyntax {
            key: format!("{} for action '{}': {}", key_str, action, e),
        })?;

        if RESERVED_KEYS.contains(&normalize_key(&parsed).as_str()) {
            return Err(KeybindError::ReservedKey {
                key: key_str.clone(),
            });
        }

        if let Some(existing_action) = key_to_action.get(&parsed) {
            return Err(KeybindError::Conflict {
                key: key_str.clone(),
                action1: existing_action.to_string(),
                action2: action.to_string(),
            });
        }
        key_to_action.insert(parsed, *action);
    }

    Ok(())
}

/// Lowercased canonical form used for the reserved-key check.
fn normalize_key(parsed: &ParsedKey) -> String {
    parsed.to_string().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_char() {
        let key = parse_key("h").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('h'));
        assert_eq!(key.modifiers, ModifierFlags::default());
    }

    #[test]
    fn test_parse_slash() {
        let key = parse_key("/").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('/'));
    }

    #[test]
    fn test_parse_plus_key() {
        assert_eq!(parse_key("+").unwrap().code, KeyCodeName::Char('+'));

        let key = parse_key("Ctrl++").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('+'));
        assert!(key.modifiers.ctrl);
    }

    #[test]
    fn test_parse_ctrl_combo() {
        let key = parse_key("Ctrl+d").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('d'));
        assert!(key.modifiers.ctrl);
        assert!(!key.modifiers.shift);
        assert!(!key.modifiers.alt);
    }

    #[test]
    fn test_meta_aliases_parse_as_ctrl() {
        for alias in ["Cmd+d", "Meta+d", "Super+d", "Command+d"] {
            let key = parse_key(alias).unwrap();
            assert!(key.modifiers.ctrl, "{alias} should set ctrl");
            assert_eq!(key, parse_key("Ctrl+d").unwrap());
        }
    }

    #[test]
    fn test_parse_all_modifiers() {
        let key = parse_key("Ctrl+Shift+Alt+x").unwrap();
        assert!(key.modifiers.ctrl && key.modifiers.shift && key.modifiers.alt);
    }

    #[test]
    fn test_parse_browser_key_names() {
        assert_eq!(parse_key("Escape").unwrap().code, KeyCodeName::Esc);
        assert_eq!(parse_key("ArrowUp").unwrap().code, KeyCodeName::Up);
        assert_eq!(parse_key("ArrowDown").unwrap().code, KeyCodeName::Down);
        assert_eq!(parse_key("arrowleft").unwrap().code, KeyCodeName::Left);
        assert_eq!(parse_key("ArrowRight").unwrap().code, KeyCodeName::Right);
    }

    #[test]
    fn test_parse_function_key_range() {
        assert_eq!(parse_key("F1").unwrap().code, KeyCodeName::F(1));
        assert_eq!(parse_key("f20").unwrap().code, KeyCodeName::F(20));
        assert!(parse_key("F0").is_err());
        assert!(parse_key("F21").is_err());
    }

    #[test]
    fn test_parse_shift_tab() {
        let key = parse_key("Shift+Tab").unwrap();
        assert_eq!(key.code, KeyCodeName::BackTab);
    }

    #[test]
    fn test_invalid_syntax() {
        assert!(matches!(
            parse_key(""),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("Ctrl+Shift"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("a+b"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            parse_key("Ctrl+Unknown"),
            Err(KeybindError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_display_parsed_key() {
        assert_eq!(parse_key("ctrl + h").unwrap().to_string(), "Ctrl+h");
        assert_eq!(parse_key("escape").unwrap().to_string(), "Esc");
        assert_eq!(parse_key("alt+shift+F2").unwrap().to_string(), "Shift+Alt+F2");
    }

    #[test]
    fn test_validate_conflicts() {
        let mut overrides = BTreeMap::new();
        overrides.insert(KeybindAction::Help, "F1".to_string());
        overrides.insert(KeybindAction::Dashboard, "f1".to_string());

        let result = validate_overrides(&overrides);
        assert!(matches!(result, Err(KeybindError::Conflict { .. })));
    }

    #[test]
    fn test_validate_conflict_through_meta_alias() {
        let mut overrides = BTreeMap::new();
        overrides.insert(KeybindAction::Courses, "Ctrl+k".to_string());
        overrides.insert(KeybindAction::Profile, "Cmd+k".to_string());

        assert!(matches!(
            validate_overrides(&overrides),
            Err(KeybindError::Conflict { .. })
        ));
    }

    #[test]
    fn test_validate_reserved_key() {
        for reserved in ["Ctrl+q", "Ctrl+Z", "Cmd+q"] {
            let mut overrides = BTreeMap::new();
            overrides.insert(KeybindAction::Help, reserved.to_string());
            assert!(
                matches!(
                    validate_overrides(&overrides),
                    Err(KeybindError::ReservedKey { .. })
                ),
                "{reserved} should be reserved"
            );
        }
    }

    #[test]
    fn test_validate_invalid_syntax() {
        let mut overrides = BTreeMap::new();
        overrides.insert(KeybindAction::Help, "".to_string());

        assert!(matches!(
            validate_overrides(&overrides),
            Err(KeybindError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_case_sensitive_char_keys() {
        let lower = parse_key("x").unwrap();
        let upper = parse_key("X").unwrap();
        assert_ne!(lower.code, upper.code);
    }
}
