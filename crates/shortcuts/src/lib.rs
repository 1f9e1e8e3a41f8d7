//! StudySphere keyboard shortcuts.
//!
//! A single dispatcher owns an ordered, immutable table of key bindings and
//! turns keyboard events into at most one command per event. Navigation and
//! focus changes go through the [`Router`] and [`FocusHost`] capabilities so
//! any front end (or a test double) can host it.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use studysphere_shortcuts::{
//!     Direction, FocusHost, InputEvent, Keymap, Route, Router, ShortcutDispatcher,
//! };
//!
//! struct History(Vec<Route>);
//!
//! impl Router for History {
//!     fn navigate(&mut self, route: Route) {
//!         self.0.push(route);
//!     }
//! }
//!
//! struct NothingFocusable;
//!
//! impl FocusHost for NothingFocusable {
//!     fn focus_search(&mut self) -> bool { false }
//!     fn close_modals(&mut self) -> usize { 0 }
//!     fn blur_active(&mut self) -> bool { false }
//!     fn focus_sibling(&mut self, _direction: Direction) -> bool { false }
//! }
//!
//! let mut dispatcher = ShortcutDispatcher::new(Keymap::defaults());
//! let mut history = History(Vec::new());
//!
//! let event = InputEvent::on_element(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
//! let outcome = dispatcher.dispatch(&event, &mut history, &mut NothingFocusable);
//!
//! assert!(outcome.default_prevented());
//! assert_eq!(history.0, vec![Route::Dashboard]);
//! ```

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod focus;
pub mod help;
pub mod keymap;
pub mod overlay;
pub mod route;
pub mod service;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use dispatcher::{Dispatch, ShortcutDispatcher};
pub use error::ShortcutError;
pub use event::{EventTarget, InputEvent};
pub use focus::{Direction, FocusHost};
pub use keymap::{Command, Keybinding, Keymap, Matcher, Section};
pub use overlay::{HelpOverlay, OverlayState};
pub use route::{Route, Router};
pub use service::{ListenerGuard, ShortcutService};
