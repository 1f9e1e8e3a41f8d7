//! Focusable element tree for the current screen.
//!
//! Responsibilities:
//! - Keep an ordered list of focusable elements, each tagged with its parent
//!   container, and track which one has focus.
//! - Host the course-details modal and its close control.
//! - Implement `FocusHost` so shortcut commands can move focus and close modals.
//!
//! Does NOT handle:
//! - Drawing (see `ui`).
//! - Text editing inside controls (see `app::components`).
//!
//! Invariants:
//! - Arrow navigation stays inside the focused element's parent container and
//!   never wraps; Tab order spans the whole document and wraps.
//! - A modal-close element exists exactly while a course-details modal is open.

use studysphere_shortcuts::{Direction, EventTarget, FocusHost, Route};

use crate::catalog::{self, RECENT_ACTIVITY};

pub const NAV: &str = "nav";
pub const HEADER: &str = "header";
pub const FEATURED: &str = "featured";
pub const ACTIVITY: &str = "activity";
pub const ENROLLED: &str = "enrolled";
pub const PROFILE: &str = "profile";
pub const COURSE_DETAILS: &str = "course-details";

pub const SEARCH_ID: &str = "search";
pub const BIO_ID: &str = "bio";
pub const LEARNING_STYLE_ID: &str = "learning-style";
pub const CLOSE_DETAILS_ID: &str = "close-details";

/// What an element is, which decides how it reacts to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    NavLink(Route),
    Search,
    CourseCard(u32),
    Activity(usize),
    Bio,
    LearningStyle,
    ModalClose,
}

impl ElementKind {
    pub fn target(self) -> EventTarget {
        match self {
            Self::Search => EventTarget::TextInput,
            Self::Bio => EventTarget::TextArea,
            Self::LearningStyle => EventTarget::Select,
            _ => EventTarget::Element,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub parent: &'static str,
    pub kind: ElementKind,
}

impl Element {
    fn new(id: impl Into<String>, parent: &'static str, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            parent,
            kind,
        }
    }
}

/// The current screen's focusable elements.
#[derive(Debug, Clone)]
pub struct Document {
    screen: Route,
    elements: Vec<Element>,
    focused: Option<usize>,
    open_course: Option<u32>,
}

impl Document {
    /// Fresh document for `screen`; nothing focused, no modal open.
    pub fn new(screen: Route, query: &str) -> Self {
        Self {
            screen,
            elements: build_elements(screen, query),
            focused: None,
            open_course: None,
        }
    }

    /// Rebuild the element list after the search query changed, keeping
    /// focus and the open modal where they still exist.
    pub fn refresh(&mut self, query: &str) {
        let focused_id = self.focused_id().map(str::to_string);
        self.elements = build_elements(self.screen, query);
        if let Some(id) = self.open_course {
            if self.position_of(ElementKind::CourseCard(id)).is_some() {
                self.push_close_control();
            } else {
                self.open_course = None;
            }
        }
        self.focused = focused_id.and_then(|id| self.elements.iter().position(|e| e.id == id));
    }

    pub fn screen(&self) -> Route {
        self.screen
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn focused(&self) -> Option<&Element> {
        self.focused.map(|i| &self.elements[i])
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focused().map(|e| e.id.as_str())
    }

    pub fn focused_kind(&self) -> Option<ElementKind> {
        self.focused().map(|e| e.kind)
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id() == Some(id)
    }

    /// Event target for the focused element.
    pub fn target(&self) -> EventTarget {
        self.focused_kind()
            .map(ElementKind::target)
            .unwrap_or_default()
    }

    /// Focus an element by id. Returns false when no such element exists.
    pub fn set_focus(&mut self, id: &str) -> bool {
        match self.elements.iter().position(|e| e.id == id) {
            Some(index) => {
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }

    /// Tab order: next element, wrapping.
    pub fn focus_next(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.focused = Some(match self.focused {
            Some(i) => (i + 1) % self.elements.len(),
            None => 0,
        });
    }

    /// Tab order: previous element, wrapping.
    pub fn focus_prev(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        let last = self.elements.len() - 1;
        self.focused = Some(match self.focused {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    pub fn open_course(&self) -> Option<u32> {
        self.open_course
    }

    /// Open the details modal for a course and focus its close control.
    pub fn open_details(&mut self, course_id: u32) {
        if self.open_course.is_some() {
            self.close_modals();
        }
        self.open_course = Some(course_id);
        self.push_close_control();
        self.focused = Some(self.elements.len() - 1);
        tracing::debug!(course_id, "Opened course details");
    }

    fn push_close_control(&mut self) {
        self.elements.push(Element::new(
            CLOSE_DETAILS_ID,
            COURSE_DETAILS,
            ElementKind::ModalClose,
        ));
    }

    fn position_of(&self, kind: ElementKind) -> Option<usize> {
        self.elements.iter().position(|e| e.kind == kind)
    }
}

fn build_elements(screen: Route, query: &str) -> Vec<Element> {
    let mut elements: Vec<Element> = Route::ALL
        .iter()
        .map(|route| {
            let slug = route.path().trim_start_matches('/');
            Element::new(format!("nav-{slug}"), NAV, ElementKind::NavLink(*route))
        })
        .collect();
    elements.push(Element::new(SEARCH_ID, HEADER, ElementKind::Search));

    match screen {
        Route::Dashboard => {
            elements.extend(catalog::search(query).into_iter().map(|c| {
                Element::new(
                    format!("featured-{}", c.id),
                    FEATURED,
                    ElementKind::CourseCard(c.id),
                )
            }));
            elements.extend((0..RECENT_ACTIVITY.len()).map(|i| {
                Element::new(format!("activity-{i}"), ACTIVITY, ElementKind::Activity(i))
            }));
        }
        Route::Courses => {
            let matching = catalog::search(query);
            elements.extend(
                catalog::enrolled()
                    .into_iter()
                    .filter(|c| matching.iter().any(|m| m.id == c.id))
                    .map(|c| {
                        Element::new(
                            format!("enrolled-{}", c.id),
                            ENROLLED,
                            ElementKind::CourseCard(c.id),
                        )
                    }),
            );
        }
        Route::Profile => {
            elements.push(Element::new(BIO_ID, PROFILE, ElementKind::Bio));
            elements.push(Element::new(
                LEARNING_STYLE_ID,
                PROFILE,
                ElementKind::LearningStyle,
            ));
        }
    }
    elements
}

impl FocusHost for Document {
    fn focus_search(&mut self) -> bool {
        match self.position_of(ElementKind::Search) {
            Some(index) => {
                self.focused = Some(index);
                true
            }
            None => false,
        }
    }

    fn close_modals(&mut self) -> usize {
        let Some(course_id) = self.open_course.take() else {
            return 0;
        };
        self.elements.retain(|e| e.kind != ElementKind::ModalClose);
        // Return focus to the card that opened the modal.
        self.focused = self.position_of(ElementKind::CourseCard(course_id));
        tracing::debug!(course_id, "Closed course details");
        1
    }

    fn blur_active(&mut self) -> bool {
        self.focused.take().is_some()
    }

    fn focus_sibling(&mut self, direction: Direction) -> bool {
        let Some(current) = self.focused else {
            return false;
        };
        let parent = self.elements[current].parent;
        let sibling = match direction {
            Direction::Previous => self.elements[..current]
                .iter()
                .rposition(|e| e.parent == parent),
            Direction::Next => self.elements[current + 1..]
                .iter()
                .position(|e| e.parent == parent)
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

    #[test]
    fn dashboard_lists_nav_search_cards_and_activity() {
        let doc = Document::new(Route::Dashboard, "");
        let ids: Vec<&str> = doc.elements().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "nav-dashboard",
                "nav-courses",
                "nav-profile",
                "search",
                "featured-1",
                "featured-2",
                "featured-3",
                "featured-4",
                "activity-0",
                "activity-1",
                "activity-2",
            ]
        );
    }

    #[test]
    fn arrows_stay_inside_the_container() {
        let mut doc = Document::new(Route::Dashboard, "");
        doc.set_focus("featured-4");

        assert!(!doc.focus_sibling(Direction::Next));
        assert!(doc.is_focused("featured-4"));

        doc.set_focus("activity-0");
        assert!(!doc.focus_sibling(Direction::Previous));
        assert!(doc.focus_sibling(Direction::Next));
        assert!(doc.is_focused("activity-1"));
    }

    #[test]
    fn tab_wraps_across_containers() {
        let mut doc = Document::new(Route::Profile, "");
        doc.focus_prev();
        assert!(doc.is_focused(LEARNING_STYLE_ID));
        doc.focus_next();
        assert!(doc.is_focused("nav-dashboard"));
    }

    #[test]
    fn modal_close_returns_focus_to_card() {
        let mut doc = Document::new(Route::Courses, "");
        doc.set_focus("enrolled-2");
        doc.open_details(2);
        assert!(doc.is_focused(CLOSE_DETAILS_ID));

        assert_eq!(doc.close_modals(), 1);
        assert_eq!(doc.open_course(), None);
        assert!(doc.is_focused("enrolled-2"));
        assert_eq!(doc.close_modals(), 0);
    }

    #[test]
    fn refresh_keeps_focus_on_search() {
        let mut doc = Document::new(Route::Dashboard, "");
        doc.focus_search();
        doc.refresh("history");

        assert!(doc.is_focused(SEARCH_ID));
        let cards = doc
            .elements()
            .iter()
            .filter(|e| e.parent == FEATURED)
            .count();
        assert_eq!(cards, 1);
    }

    #[test]
    fn text_controls_map_to_text_targets() {
        let mut doc = Document::new(Route::Profile, "");
        assert_eq!(doc.target(), EventTarget::Element);
        doc.set_focus(BIO_ID);
        assert_eq!(doc.target(), EventTarget::TextArea);
        doc.set_focus(LEARNING_STYLE_ID);
        assert_eq!(doc.target(), EventTarget::Select);
        doc.focus_search();
        assert_eq!(doc.target(), EventTarget::TextInput);
    }
}
