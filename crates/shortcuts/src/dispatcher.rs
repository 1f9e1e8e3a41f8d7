//! Keyboard shortcut dispatcher.
//!
//! Responsibilities:
//! - Match each keyboard event against the keymap and run at most one command.
//! - Leave text entry alone, except that Escape blurs the focused text control.
//! - Own the help overlay state.
//!
//! Does NOT handle:
//! - Listener lifecycle or the process-wide instance (see `service`).
//! - Implementing navigation or focus (callers pass `Router` / `FocusHost`).
//!
//! Invariants:
//! - Escape inside a text-entry control blurs it and stops; the Escape binding
//!   does not also fire.
//! - A command runs only when the event's default behavior is suppressed, and
//!   vice versa.

use std::sync::Arc;

use crossterm::event::KeyCode;
use tokio::sync::watch;

use crate::event::InputEvent;
use crate::focus::FocusHost;
use crate::keymap::{Command, Keymap};
use crate::overlay::{HelpOverlay, OverlayState};
use crate::route::Router;

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing matched; the event keeps its default behavior.
    Ignored,
    /// Escape removed focus from a text-entry control.
    Blurred,
    /// A binding fired.
    Handled(Command),
}

impl Dispatch {
    /// Whether the host must suppress the event's default behavior.
    pub fn default_prevented(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Handled(command) => Some(*command),
            _ => None,
        }
    }
}

/// Matches key events against an immutable keymap.
#[derive(Debug)]
pub struct ShortcutDispatcher {
    keymap: Arc<Keymap>,
    help: HelpOverlay,
}

impl ShortcutDispatcher {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap: Arc::new(keymap),
            help: HelpOverlay::new(),
        }
    }

    pub fn keymap(&self) -> Arc<Keymap> {
        Arc::clone(&self.keymap)
    }

    pub fn help_visible(&self) -> bool {
        self.help.is_visible()
    }

    /// Explicit dismissal (the overlay's close button).
    pub fn dismiss_help(&self) {
        self.help.hide();
    }

    pub fn subscribe_help(&self) -> watch::Receiver<OverlayState> {
        self.help.subscribe()
    }

    /// Handle one key event.
    pub fn dispatch(
        &mut self,
        event: &InputEvent,
        router: &mut dyn Router,
        focus: &mut dyn FocusHost,
    ) -> Dispatch {
        if !event.is_press() {
            return Dispatch::Ignored;
        }

        if event.target.is_text_entry() {
            if event.key.code == KeyCode::Esc {
                focus.blur_active();
                tracing::debug!(target_kind = ?event.target, "Escape blurred text entry");
                return Dispatch::Blurred;
            }
            return Dispatch::Ignored;
        }

        let Some(binding) = self.keymap.resolve(&event.key) else {
            return Dispatch::Ignored;
        };
        let command = binding.command;

        tracing::debug!(
            command = command.name(),
            key = %binding.matcher,
            "Shortcut matched"
        );
        metrics::counter!("studysphere_shortcuts_dispatched_total", "command" => command.name())
            .increment(1);

        self.run(command, router, focus);
        Dispatch::Handled(command)
    }

    fn run(&mut self, command: Command, router: &mut dyn Router, focus: &mut dyn FocusHost) {
        match command {
            Command::ShowHelp => {
                self.help.show();
            }
            Command::Navigate(route) => router.navigate(route),
            Command::FocusSearch => {
                if !focus.focus_search() {
                    tracing::debug!("No search control to focus");
                }
            }
            Command::CloseOverlays => {
                self.help.hide();
                let closed = focus.close_modals();
                tracing::debug!(closed, "Closed modals");
            }
            Command::FocusSibling(direction) => {
                if !focus.focus_sibling(direction) {
                    tracing::debug!(?direction, "No sibling to focus");
                }
            }
        }
    }
}

impl Default for ShortcutDispatcher {
    fn default() -> Self {
        Self::new(Keymap::defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventTarget;
    use crate::focus::{Direction, MockFocusHost};
    use crate::route::{MockRouter, Route};
    use crossterm::event::{KeyEvent, KeyModifiers};
    use mockall::predicate::eq;

    fn press(code: KeyCode, modifiers: KeyModifiers, target: EventTarget) -> InputEvent {
        InputEvent::new(KeyEvent::new(code, modifiers), target)
    }

    #[test]
    fn ctrl_d_navigates_once() {
        let mut dispatcher = ShortcutDispatcher::default();
        let mut router = MockRouter::new();
        router
            .expect_navigate()
            .with(eq(Route::Dashboard))
            .times(1)
            .return_const(());
        let mut focus = MockFocusHost::new();

        let outcome = dispatcher.dispatch(
            &press(KeyCode::Char('d'), KeyModifiers::CONTROL, EventTarget::Element),
            &mut router,
            &mut focus,
        );

        assert_eq!(outcome, Dispatch::Handled(Command::Navigate(Route::Dashboard)));
        assert!(outcome.default_prevented());
    }

    #[test]
    fn ctrl_d_in_text_input_does_nothing() {
        let mut dispatcher = ShortcutDispatcher::default();
        let mut router = MockRouter::new();
        router.expect_navigate().never();
        let mut focus = MockFocusHost::new();
        focus.expect_blur_active().never();

        let outcome = dispatcher.dispatch(
            &press(KeyCode::Char('d'), KeyModifiers::CONTROL, EventTarget::TextInput),
            &mut router,
            &mut focus,
        );

        assert_eq!(outcome, Dispatch::Ignored);
        assert!(!outcome.default_prevented());
    }

    #[test]
    fn escape_in_text_entry_only_blurs() {
        for target in [EventTarget::TextInput, EventTarget::TextArea, EventTarget::Select] {
            let mut dispatcher = ShortcutDispatcher::default();
            dispatcher.help.show();
            let mut router = MockRouter::new();
            let mut focus = MockFocusHost::new();
            focus.expect_blur_active().times(1).return_const(true);
            focus.expect_close_modals().never();

            let outcome = dispatcher.dispatch(
                &press(KeyCode::Esc, KeyModifiers::SHIFT, target),
                &mut router,
                &mut focus,
            );

            assert_eq!(outcome, Dispatch::Blurred);
            assert!(!outcome.default_prevented());
            assert!(dispatcher.help_visible(), "overlay untouched by blur");
        }
    }

    #[test]
    fn escape_closes_help_and_modals() {
        let mut dispatcher = ShortcutDispatcher::default();
        let mut router = MockRouter::new();
        let mut focus = MockFocusHost::new();
        focus.expect_close_modals().times(1).return_const(2usize);

        dispatcher.dispatch(
            &press(KeyCode::Char('h'), KeyModifiers::CONTROL, EventTarget::Element),
            &mut router,
            &mut focus,
        );
        assert!(dispatcher.help_visible());

        let outcome = dispatcher.dispatch(
            &press(KeyCode::Esc, KeyModifiers::NONE, EventTarget::Element),
            &mut router,
            &mut focus,
        );
        assert_eq!(outcome, Dispatch::Handled(Command::CloseOverlays));
        assert!(!dispatcher.help_visible());
    }

    #[test]
    fn arrows_move_focus_between_siblings() {
        let mut dispatcher = ShortcutDispatcher::default();
        let mut router = MockRouter::new();
        let mut focus = MockFocusHost::new();
        focus
            .expect_focus_sibling()
            .with(eq(Direction::Next))
            .times(1)
            .return_const(true);
        focus
            .expect_focus_sibling()
            .with(eq(Direction::Previous))
            .times(1)
            .return_const(false);

        dispatcher.dispatch(
            &press(KeyCode::Down, KeyModifiers::NONE, EventTarget::Element),
            &mut router,
            &mut focus,
        );
        let outcome = dispatcher.dispatch(
            &press(KeyCode::Up, KeyModifiers::NONE, EventTarget::Element),
            &mut router,
            &mut focus,
        );

        // a missing sibling is still a handled shortcut
        assert!(outcome.default_prevented());
    }

    #[test]
    fn slash_and_ctrl_s_focus_search() {
        let mut dispatcher = ShortcutDispatcher::default();
        let mut router = MockRouter::new();
        let mut focus = MockFocusHost::new();
        focus.expect_focus_search().times(2).return_const(true);

        dispatcher.dispatch(
            &press(KeyCode::Char('/'), KeyModifiers::NONE, EventTarget::Element),
            &mut router,
            &mut focus,
        );
        dispatcher.dispatch(
            &press(KeyCode::Char('s'), KeyModifiers::META, EventTarget::Element),
            &mut router,
            &mut focus,
        );
    }

    #[test]
    fn dismiss_help_hides_overlay() {
        let dispatcher = ShortcutDispatcher::default();
        let mut rx = dispatcher.subscribe_help();

        dispatcher.help.show();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), OverlayState::Visible);

        dispatcher.dismiss_help();
        assert!(!dispatcher.help_visible());
        assert_eq!(*rx.borrow_and_update(), OverlayState::Hidden);
    }
}
