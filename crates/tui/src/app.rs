//! Application state and key handling for the terminal front end.
//!
//! Responsibilities:
//! - Own the screen router, the focusable document and the text controls.
//! - Hand every key press to the shortcut service first, then apply the
//!   key's default behavior when no shortcut claimed it.
//!
//! Does NOT handle:
//! - Matching shortcuts (see `studysphere_shortcuts`).
//! - Drawing (see `ui`).
//! - Reading terminal events (see `main.rs`).
//!
//! Invariants:
//! - The keyboard listener stays mounted for the lifetime of an `App`.
//! - The document always describes the router's current screen.
//! - `q` / `Ctrl+q` quit only when no text-entry control has focus.

pub mod components;
pub mod router;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Frame;
use studysphere_config::Platform;
use studysphere_shortcuts::{
    Command, Dispatch, FocusHost, InputEvent, Keymap, ListenerGuard, Route, Router,
    ShortcutError, ShortcutService,
};

use crate::action::Action;
use crate::catalog::LEARNING_STYLES;
use crate::document::{Document, ElementKind};
use components::{MultiLineInput, SelectInput, SingleLineInput};
use router::ScreenRouter;

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

pub struct App {
    pub router: ScreenRouter,
    pub document: Document,
    pub search: SingleLineInput,
    pub bio: MultiLineInput<'static>,
    pub learning_style: SelectInput,
    pub platform: Platform,
    /// Last user-facing status message.
    pub status: Option<String>,
    listener: ListenerGuard,
}

impl App {
    /// Build the app and mount its keyboard listener on `shortcuts`.
    ///
    /// # Errors
    ///
    /// Fails if another listener is already mounted on the service.
    pub fn new(shortcuts: &ShortcutService, platform: Platform) -> Result<Self, ShortcutError> {
        let listener = shortcuts.mount_listener()?;
        let router = ScreenRouter::default();
        Ok(Self {
            document: Document::new(router.current(), ""),
            router,
            search: SingleLineInput::with_placeholder("Search courses, topics, or instructors..."),
            bio: MultiLineInput::with_placeholder("Tell other learners about yourself"),
            learning_style: SelectInput::new(&LEARNING_STYLES),
            platform,
            status: None,
            listener,
        })
    }

    pub fn shortcuts(&self) -> &ShortcutService {
        self.listener.service()
    }

    pub fn screen(&self) -> Route {
        self.router.current()
    }

    pub fn help_visible(&self) -> bool {
        self.shortcuts().help_visible()
    }

    pub fn keymap(&self) -> Arc<Keymap> {
        self.shortcuts().keymap()
    }

    pub fn render(&mut self, f: &mut Frame) {
        crate::ui::render(f, self);
    }

    /// Apply one action. Returns a follow-up action for the main loop.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        match action {
            Action::Input(key) => self.handle_input(key),
            Action::Resize(width, height) => {
                tracing::debug!(width, height, "Terminal resized");
                None
            }
            Action::Quit => Some(Action::Quit),
        }
    }

    /// Handle one key event.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let event = InputEvent::new(key, self.document.target());
        let outcome =
            self.listener
                .service()
                .handle_event(&event, &mut self.router, &mut self.document);

        match outcome {
            Dispatch::Handled(command) => {
                self.after_command(command);
                None
            }
            Dispatch::Blurred => None,
            Dispatch::Ignored => self.default_action(key),
        }
    }

    fn after_command(&mut self, command: Command) {
        if let Command::Navigate(route) = command {
            self.sync_screen();
            self.status = Some(format!("Opened {}", route.title()));
        }
    }

    /// Rebuild the document when the router moved to another screen.
    fn sync_screen(&mut self) {
        let current = self.router.current();
        if self.document.screen() != current {
            self.document = Document::new(current, self.search.value());
        }
    }

    /// What a key does when no shortcut claimed it.
    fn default_action(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Tab => {
                self.document.focus_next();
                return None;
            }
            KeyCode::BackTab => {
                self.document.focus_prev();
                return None;
            }
            _ => {}
        }

        match self.document.focused_kind() {
            Some(ElementKind::Search) => {
                if self.search.handle_key(key) {
                    self.document.refresh(self.search.value());
                }
                None
            }
            Some(ElementKind::Bio) => {
                self.bio.handle_key(key);
                None
            }
            Some(ElementKind::LearningStyle) => {
                if self.learning_style.handle_key(key) {
                    tracing::debug!(
                        style = self.learning_style.selected(),
                        "Learning style changed"
                    );
                }
                None
            }
            focused => self.element_key(key, focused),
        }
    }

    fn element_key(&mut self, key: KeyEvent, focused: Option<ElementKind>) -> Option<Action> {
        let plain = key.modifiers.is_empty();
        match key.code {
            KeyCode::Char('q') if plain || key.modifiers == KeyModifiers::CONTROL => {
                Some(Action::Quit)
            }
            KeyCode::Enter if plain && self.help_visible() => {
                self.shortcuts().dismiss_help();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') if plain => {
                if let Some(kind) = focused {
                    self.activate(kind);
                }
                None
            }
            _ => None,
        }
    }

    /// Enter on a focused element.
    fn activate(&mut self, kind: ElementKind) {
        match kind {
            ElementKind::NavLink(route) => {
                self.router.navigate(route);
                self.sync_screen();
                self.status = Some(format!("Opened {}", route.title()));
            }
            ElementKind::CourseCard(id) => self.document.open_details(id),
            ElementKind::ModalClose => {
                self.document.close_modals();
            }
            ElementKind::Activity(_)
            | ElementKind::Search
            | ElementKind::Bio
            | ElementKind::LearningStyle => {}
        }
    }
}
