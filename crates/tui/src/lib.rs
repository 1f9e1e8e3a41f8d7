//! StudySphere terminal front end.
//!
//! Hosts the keyboard shortcut dispatcher from `studysphere-shortcuts` in a
//! ratatui application: three screens, a search box, profile controls and a
//! course-details modal, all reachable from the keyboard.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
//! use studysphere_config::Platform;
//! use studysphere_shortcuts::{Route, ShortcutDispatcher, ShortcutService};
//! use studysphere_tui::App;
//!
//! let shortcuts = ShortcutService::new(ShortcutDispatcher::default());
//! let mut app = App::new(&shortcuts, Platform::Other).unwrap();
//!
//! app.handle_input(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
//! assert_eq!(app.screen(), Route::Profile);
//! ```

pub mod action;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod document;
pub mod metrics_exporter;
pub mod runtime;
pub mod ui;

pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use document::{Document, ElementKind};
