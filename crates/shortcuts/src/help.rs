//! Help overlay content built from the keymap.
//!
//! Responsibilities:
//! - Turn keymap bindings into human-readable key labels and help text.
//! - Label the primary modifier per platform (`⌘` on macOS, `Ctrl` elsewhere).
//!
//! Does NOT handle:
//! - Owning the overlay's visibility (see `overlay`).
//! - Drawing to a terminal (the front end lays out `HelpContent`).
//!
//! Invariants:
//! - Every binding in the keymap appears exactly once, in keymap order within
//!   its section; sections appear in order of first use.

use std::fmt;

use crossterm::event::KeyModifiers;
use studysphere_config::Platform;

use crate::keymap::{Keybinding, Keymap, Section, key_name};

pub const TITLE: &str = "Keyboard Shortcuts";
pub const SUBTITLE: &str = "Use these keyboard shortcuts to navigate faster";

pub const PRO_TIPS: [&str; 4] = [
    "Press Tab to navigate between interactive elements",
    "Use Enter to activate buttons and links",
    "Hold Shift while tabbing to go backwards",
    "Most shortcuts work with Cmd on Mac instead of Ctrl",
];

/// The individual key caps for a binding, e.g. `["Ctrl", "h"]`.
pub fn key_caps(binding: &Keybinding, platform: Platform) -> Vec<String> {
    let modifiers = binding.matcher.modifiers;
    let mut caps = Vec::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        caps.push(
            match platform {
                Platform::Mac => "⌘",
                Platform::Other => "Ctrl",
            }
            .to_string(),
        );
    }
    if modifiers.contains(KeyModifiers::SHIFT) {
        caps.push("Shift".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        caps.push("Alt".to_string());
    }
    caps.push(key_name(binding.matcher.code));
    caps
}

/// Caps joined with `+`.
pub fn key_label(binding: &Keybinding, platform: Platform) -> String {
    key_caps(binding, platform).join("+")
}

/// Bindings grouped by section, sections in order of first appearance.
pub fn sections(keymap: &Keymap) -> Vec<(Section, Vec<&Keybinding>)> {
    let mut grouped: Vec<(Section, Vec<&Keybinding>)> = Vec::new();
    for binding in keymap.bindings() {
        match grouped.iter_mut().find(|(s, _)| *s == binding.section) {
            Some((_, entries)) => entries.push(binding),
            None => grouped.push((binding.section, vec![binding])),
        }
    }
    grouped
}

/// One row of the overlay: key label and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: String,
    pub description: &'static str,
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub title: &'static str,
    pub entries: Vec<HelpEntry>,
}

impl HelpSection {
    /// Widest key label in the section, in characters.
    pub fn key_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.keys.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Everything the help overlay shows, ready for a front end to lay out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: Vec<HelpSection>,
    pub pro_tips: &'static [&'static str],
}

impl HelpContent {
    pub fn new(keymap: &Keymap, platform: Platform) -> Self {
        let sections = sections(keymap)
            .into_iter()
            .map(|(section, bindings)| HelpSection {
                title: section.title(),
                entries: bindings
                    .into_iter()
                    .map(|b| HelpEntry {
                        keys: key_label(b, platform),
                        description: b.description,
                    })
                    .collect(),
            })
            .collect();
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            sections,
            pro_tips: &PRO_TIPS,
        }
    }
}

impl fmt::Display for HelpContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        for section in &self.sections {
            writeln!(f, "\n{}:", section.title)?;
            let width = section.key_width();
            for entry in &section.entries {
                writeln!(f, "  {:<width$}  {}", entry.keys, entry.description)?;
            }
        }
        writeln!(f, "\nPro Tips:")?;
        for tip in self.pro_tips {
            writeln!(f, "  • {tip}")?;
        }
        Ok(())
    }
}

/// Overlay content when visible, `None` when hidden.
pub fn render_help(visible: bool, keymap: &Keymap, platform: Platform) -> Option<HelpContent> {
    visible.then(|| HelpContent::new(keymap, platform))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Command, Matcher};
    use crossterm::event::KeyCode;

    #[test]
    fn help_lists_every_binding() {
        let keymap = Keymap::defaults();
        let help = HelpContent::new(&keymap, Platform::Other).to_string();
        for binding in keymap.bindings() {
            assert!(
                help.contains(binding.description),
                "missing {}",
                binding.description
            );
        }
        assert!(help.contains("Ctrl+h"));
        assert!(help.contains("Escape"));
        assert!(help.contains("ArrowDown"));
    }

    #[test]
    fn mac_uses_command_symbol() {
        let keymap = Keymap::defaults();
        let help = HelpContent::new(&keymap, Platform::Mac).to_string();
        assert!(help.contains("⌘+d"));
        assert!(!help.contains("Ctrl+d"));
    }

    #[test]
    fn sections_in_first_use_order() {
        let order: Vec<Section> = sections(&Keymap::defaults())
            .into_iter()
            .map(|(s, _)| s)
            .collect();
        assert_eq!(
            order,
            [
                Section::General,
                Section::Navigation,
                Section::Search,
                Section::Lists
            ]
        );
    }

    #[test]
    fn space_and_modifiers_render_as_caps() {
        let binding = Keybinding::new(
            Section::General,
            "Play",
            Matcher::new(
                KeyCode::Char(' '),
                KeyModifiers::SHIFT | KeyModifiers::ALT,
            ),
            Command::ShowHelp,
        );
        assert_eq!(key_caps(&binding, Platform::Other), ["Shift", "Alt", "Space"]);
    }

    #[test]
    fn hidden_overlay_renders_nothing() {
        let keymap = Keymap::defaults();
        assert!(render_help(false, &keymap, Platform::Other).is_none());
        assert!(render_help(true, &keymap, Platform::Other).is_some());
    }

    #[test]
    fn content_groups_every_binding_with_plain_labels() {
        let keymap = Keymap::defaults();
        let content = HelpContent::new(&keymap, Platform::Other);

        let entries: Vec<&HelpEntry> = content.sections.iter().flat_map(|s| &s.entries).collect();
        assert_eq!(entries.len(), keymap.len());

        let navigation = &content.sections[1];
        assert_eq!(navigation.title, Section::Navigation.title());
        assert_eq!(navigation.entries[0].keys, "Ctrl+d");
        assert_eq!(navigation.key_width(), "Ctrl+d".len());
        assert_eq!(content.pro_tips, PRO_TIPS);
    }
}
