//! Help overlay visibility state.
//!
//! Responsibilities:
//! - Own the `Hidden` / `Visible` state of the keyboard-shortcuts overlay.
//! - Publish every change to subscribers so views can re-render.
//!
//! Does NOT handle:
//! - Rendering the overlay (see `help`).
//!
//! Invariants:
//! - Initial state is `Hidden`.
//! - Subscribers are only notified on an actual transition.

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Two-state machine for the help overlay.
#[derive(Debug)]
pub struct HelpOverlay {
    state: watch::Sender<OverlayState>,
}

impl HelpOverlay {
    pub fn new() -> Self {
        let (state, _) = watch::channel(OverlayState::Hidden);
        Self { state }
    }

    pub fn state(&self) -> OverlayState {
        *self.state.borrow()
    }

    pub fn is_visible(&self) -> bool {
        self.state() == OverlayState::Visible
    }

    /// `Hidden -> Visible`. Returns whether the state changed.
    pub fn show(&self) -> bool {
        self.transition(OverlayState::Visible)
    }

    /// `Visible -> Hidden`. Returns whether the state changed.
    pub fn hide(&self) -> bool {
        self.transition(OverlayState::Hidden)
    }

    /// Receiver that observes every future transition.
    pub fn subscribe(&self) -> watch::Receiver<OverlayState> {
        self.state.subscribe()
    }

    fn transition(&self, next: OverlayState) -> bool {
        let changed = self.state.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            tracing::debug!(state = ?next, "Help overlay changed");
        }
        changed
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let overlay = HelpOverlay::new();
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn show_and_hide_report_transitions() {
        let overlay = HelpOverlay::new();

        assert!(overlay.show());
        assert!(!overlay.show(), "already visible");
        assert!(overlay.is_visible());

        assert!(overlay.hide());
        assert!(!overlay.hide(), "already hidden");
        assert!(!overlay.is_visible());
    }

    #[test]
    fn subscribers_see_only_real_changes() {
        let overlay = HelpOverlay::new();
        let mut rx = overlay.subscribe();
        assert!(!rx.has_changed().unwrap());

        overlay.hide();
        assert!(!rx.has_changed().unwrap());

        overlay.show();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), OverlayState::Visible);
        assert!(!rx.has_changed().unwrap());
    }
}
