//! Process-wide shortcut service.
//!
//! Responsibilities:
//! - Hold the one dispatcher instance for the whole application.
//! - Give views a cloneable handle to it instead of letting each view build its own.
//! - Track the keyboard listener with an acquire-on-mount / release-on-drop guard.
//!
//! Does NOT handle:
//! - Reading terminal or window events (the host forwards them to `handle_event`).
//!
//! Invariants:
//! - At most one service is installed at a time (`init` .. `shutdown`).
//! - At most one listener is mounted per service; events arriving with no
//!   listener mounted are ignored.
//! - Dropping a stale guard never unmounts a newer listener.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::dispatcher::{Dispatch, ShortcutDispatcher};
use crate::error::ShortcutError;
use crate::event::InputEvent;
use crate::focus::FocusHost;
use crate::keymap::Keymap;
use crate::overlay::OverlayState;
use crate::route::Router;

static GLOBAL: Mutex<Option<ShortcutService>> = Mutex::new(None);

/// Install the process-wide service. Call once at application start.
pub fn init(dispatcher: ShortcutDispatcher) -> Result<ShortcutService, ShortcutError> {
    let mut global = lock(&GLOBAL);
    if global.is_some() {
        return Err(ShortcutError::AlreadyInitialized);
    }
    let service = ShortcutService::new(dispatcher);
    *global = Some(service.clone());
    tracing::info!(bindings = service.keymap().len(), "Shortcut service initialized");
    Ok(service)
}

/// Handle to the installed service.
pub fn global() -> Result<ShortcutService, ShortcutError> {
    lock(&GLOBAL).clone().ok_or(ShortcutError::NotInitialized)
}

/// Tear the service down. Any mounted listener stops receiving events.
pub fn shutdown() -> Result<(), ShortcutError> {
    let service = lock(&GLOBAL).take().ok_or(ShortcutError::NotInitialized)?;
    service.state().listener = None;
    tracing::info!("Shortcut service shut down");
    Ok(())
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug)]
struct ServiceState {
    dispatcher: ShortcutDispatcher,
    listener: Option<u64>,
    next_listener_id: u64,
}

/// Shared handle to a dispatcher and its listener slot.
#[derive(Debug, Clone)]
pub struct ShortcutService {
    state: Arc<Mutex<ServiceState>>,
}

impl ShortcutService {
    /// A standalone service, not registered globally.
    pub fn new(dispatcher: ShortcutDispatcher) -> Self {
        Self {
            state: Arc::new(Mutex::new(ServiceState {
                dispatcher,
                listener: None,
                next_listener_id: 0,
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, ServiceState> {
        lock(&self.state)
    }

    /// Mount the keyboard listener.
    ///
    /// # Errors
    ///
    /// Returns `ListenerAlreadyMounted` while another guard is alive.
    pub fn mount_listener(&self) -> Result<ListenerGuard, ShortcutError> {
        let mut state = self.state();
        if state.listener.is_some() {
            return Err(ShortcutError::ListenerAlreadyMounted);
        }
        let id = state.next_listener_id;
        state.next_listener_id += 1;
        state.listener = Some(id);
        tracing::info!(listener = id, "Shortcut listener mounted");
        Ok(ListenerGuard {
            service: self.clone(),
            id,
        })
    }

    pub fn is_listening(&self) -> bool {
        self.state().listener.is_some()
    }

    /// Forward one event to the dispatcher if a listener is mounted.
    ///
    /// The service stays locked while the command runs, so `router` and
    /// `focus` must not call back into this service.
    pub fn handle_event(
        &self,
        event: &InputEvent,
        router: &mut dyn Router,
        focus: &mut dyn FocusHost,
    ) -> Dispatch {
        let mut state = self.state();
        if state.listener.is_none() {
            return Dispatch::Ignored;
        }
        state.dispatcher.dispatch(event, router, focus)
    }

    pub fn help_visible(&self) -> bool {
        self.state().dispatcher.help_visible()
    }

    pub fn dismiss_help(&self) {
        self.state().dispatcher.dismiss_help();
    }

    pub fn subscribe_help(&self) -> watch::Receiver<OverlayState> {
        self.state().dispatcher.subscribe_help()
    }

    pub fn keymap(&self) -> Arc<Keymap> {
        self.state().dispatcher.keymap()
    }

    fn unmount(&self, id: u64) {
        let mut state = self.state();
        if state.listener == Some(id) {
            state.listener = None;
            tracing::info!(listener = id, "Shortcut listener unmounted");
        }
    }
}

/// Keeps the keyboard listener mounted until dropped.
#[derive(Debug)]
#[must_use = "the listener is unmounted as soon as the guard is dropped"]
pub struct ListenerGuard {
    service: ShortcutService,
    id: u64,
}

impl ListenerGuard {
    pub fn service(&self) -> &ShortcutService {
        &self.service
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.service.unmount(self.id);
    }
}
