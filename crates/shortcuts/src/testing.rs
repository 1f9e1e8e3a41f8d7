//! Test doubles for the dispatcher's collaborators.
//!
//! Available in unit tests and, with the `test-utils` feature, to other crates.
//!
//! `FakeDocument` models a flat document: an ordered list of elements, each
//! belonging to a parent container. Siblings are elements that share a parent.

use crate::event::EventTarget;
use crate::focus::{Direction, FocusHost};
use crate::route::{Route, Router};

/// Router that records every navigation.
#[derive(Debug, Default)]
pub struct RecordingRouter {
    pub visited: Vec<Route>,
}

impl Router for RecordingRouter {
    fn navigate(&mut self, route: Route) {
        self.visited.push(route);
    }
}

/// Role of a fake element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Plain,
    Search,
    ModalClose,
    TextInput,
    TextArea,
    Select,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeElement {
    pub id: String,
    pub parent: String,
    pub role: Role,
}

impl FakeElement {
    pub fn new(id: impl Into<String>, parent: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            parent: parent.into(),
            role,
        }
    }
}

/// In-memory stand-in for a rendered view tree.
#[derive(Debug, Default)]
pub struct FakeDocument {
    pub elements: Vec<FakeElement>,
    focused: Option<usize>,
    /// Ids of modal-close controls activated, in activation order.
    pub activated: Vec<String>,
    pub blur_count: usize,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, parent: &str, role: Role) -> Self {
        self.elements.push(FakeElement::new(id, parent, role));
        self
    }

    /// Focus an element by id. Panics if the id is unknown.
    pub fn focus(&mut self, id: &str) {
        let index = self
            .elements
            .iter()
            .position(|e| e.id == id)
            .unwrap_or_else(|| panic!("no element with id {id}"));
        self.focused = Some(index);
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused.map(|i| self.elements[i].id.as_str())
    }

    /// Event target for the focused element.
    pub fn target(&self) -> EventTarget {
        match self.focused.map(|i| self.elements[i].role) {
            Some(Role::Search | Role::TextInput) => EventTarget::TextInput,
            Some(Role::TextArea) => EventTarget::TextArea,
            Some(Role::Select) => EventTarget::Select,
            _ => EventTarget::Element,
        }
    }
}

impl FocusHost for FakeDocument {
    fn focus_search(&mut self) -> bool {
        match self.elements.iter().position(|e| e.role == Role::Search) {
            Some(index) => {
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }

    fn close_modals(&mut self) -> usize {
        let closers: Vec<String> = self
            .elements
            .iter()
            .filter(|e| e.role == Role::ModalClose)
            .map(|e| e.id.clone())
            .collect();
        let count = closers.len();
        self.activated.extend(closers);
        count
    }

    fn blur_active(&mut self) -> bool {
        self.blur_count += 1;
        self.focused.take().is_some()
    }

    fn focus_sibling(&mut self, direction: Direction) -> bool {
        let Some(current) = self.focused else {
            return false;
        };
        let parent = &self.elements[current].parent;
        let sibling = match direction {
            Direction::Previous => self.elements[..current]
                .iter()
                .rposition(|e| &e.parent == parent),
            Direction::Next => self.elements[current + 1..]
                .iter()
                .position(|e| &e.parent == parent)
                .map(|offset| current + 1 + offset),
        };
        match sibling {
            Some(index) => {
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> FakeDocument {
        FakeDocument::new()
            .with("search", "header", Role::Search)
            .with("a", "list", Role::Plain)
            .with("aside", "sidebar", Role::Plain)
            .with("b", "list", Role::Plain)
    }

    #[test]
    fn siblings_skip_other_containers() {
        let mut doc = list();
        doc.focus("a");
        assert!(doc.focus_sibling(Direction::Next));
        assert_eq!(doc.focused_id(), Some("b"));
        assert!(!doc.focus_sibling(Direction::Next));
        assert_eq!(doc.focused_id(), Some("b"));
        assert!(doc.focus_sibling(Direction::Previous));
        assert_eq!(doc.focused_id(), Some("a"));
    }

    #[test]
    fn search_role_is_a_text_input_target() {
        let mut doc = list();
        assert!(doc.focus_search());
        assert_eq!(doc.target(), EventTarget::TextInput);
    }
}
