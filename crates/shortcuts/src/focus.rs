//! Focus capability used by focus-moving shortcuts.
//!
//! Responsibilities:
//! - Abstract the element queries the dispatcher needs ("first search control",
//!   "every modal-close control", "sibling of the focused element").
//!
//! Does NOT handle:
//! - Deciding which keys trigger these queries (see `keymap`).
//!
//! Invariants:
//! - Finding nothing is not an error: methods report `false` / `0` and change nothing.

/// Direction for list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// DOM-like focus operations provided by the host view tree.
#[cfg_attr(test, mockall::automock)]
pub trait FocusHost {
    /// Give input focus to the first element flagged as a search control.
    fn focus_search(&mut self) -> bool;

    /// Activate every element flagged as a modal-close control.
    ///
    /// Returns how many were activated.
    fn close_modals(&mut self) -> usize;

    /// Remove focus from the focused element.
    fn blur_active(&mut self) -> bool;

    /// Move focus to the previous or next sibling of the focused element.
    ///
    /// Navigation never wraps.
    fn focus_sibling(&mut self, direction: Direction) -> bool;
}
