//! Errors for the shortcut service lifecycle and keymap construction.
//!
//! Dispatching itself never fails; these only surface at setup and teardown.

use studysphere_config::keybind::KeybindError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Shortcut service is already initialized")]
    AlreadyInitialized,

    #[error("Shortcut service is not initialized")]
    NotInitialized,

    #[error("A shortcut listener is already mounted")]
    ListenerAlreadyMounted,

    #[error("Invalid shortcut override: {0}")]
    Override(#[from] KeybindError),
}
