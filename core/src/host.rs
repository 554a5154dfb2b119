//! Host capability traits.
//!
//! The core never talks to a windowing runtime directly; it calls these
//! traits. The Tauri shell implements them over `WebviewWindow` and the
//! global-shortcut plugin; tests implement them with recording fakes.

use thiserror::Error;

use crate::hotkeys::HotkeyBinding;
use crate::passthrough::Passthrough;
use crate::role::{RoleSpec, WindowRole};


#[derive(Debug, Error)]
pub enum HostError {
    #[error("window creation failed: {0}")]
    CreateWindow(String),

    #[error("hotkey registration failed: {0}")]
    RegisterHotkey(String),

    #[error("hotkey release failed: {0}")]
    UnregisterHotkey(String),
}


/// Window primitives provided by the host runtime.
///
/// Only `create` can fail; show/hide/set-passthrough are best-effort
/// commands and the implementation absorbs and logs host failures.
pub trait WindowHost {
    type Handle: Clone;

    fn create(&mut self, role: WindowRole, spec: &RoleSpec) -> Result<Self::Handle, HostError>;
    fn show(&mut self, handle: &Self::Handle);
    fn hide(&mut self, handle: &Self::Handle);
    fn set_passthrough(&mut self, handle: &Self::Handle, passthrough: Passthrough);
}


/// Global-hotkey primitives provided by the host runtime.
pub trait HotkeyHost {
    fn register(&mut self, binding: &HotkeyBinding) -> Result<(), HostError>;
    fn unregister(&mut self, binding: &HotkeyBinding) -> Result<(), HostError>;
}
