//! The narrow IPC surface exposed to web content.
//!
//! Content gets exactly three capabilities: subscribe to the
//! toggle-overlay event, subscribe to the open-browser event, and send a
//! named message on an allowlisted channel. Nothing else of the host
//! reaches the webview; this boundary is a security property, not a
//! convenience.

use overhud_core::hotkeys::HotkeyAction;
use overhud_core::shell::ShellEvent;
use serde::{Deserialize, Serialize};
use tauri::AppHandle;

use crate::dispatch;


/// Event channel content subscribes to for overlay toggles.
pub const EVENT_TOGGLE_OVERLAY: &str = "toggle-overlay";

/// Event channel content subscribes to for browser-window toggles.
pub const EVENT_OPEN_BROWSER: &str = "open-browser";


/// Uniform response type for all IPC commands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IpcResponse {
    pub ok: bool,
    pub data: String,
}


impl IpcResponse {
    pub fn success(data: String) -> Self {
        IpcResponse { ok: true, data }
    }

    pub fn error(msg: String) -> Self {
        IpcResponse { ok: false, data: msg }
    }
}


/// The action a named channel maps to, if the channel is allowlisted.
pub fn action_for_channel(channel: &str) -> Option<HotkeyAction> {
    match channel {
        EVENT_TOGGLE_OVERLAY => Some(HotkeyAction::ToggleOverlay),
        EVENT_OPEN_BROWSER => Some(HotkeyAction::ToggleBrowser),
        _ => None,
    }
}


/// Send a named message from content to the shell.
///
/// Allowlisted channels request the same toggle actions the hotkeys
/// perform; anything else is rejected. `data` is accepted for forward
/// compatibility and logged, never interpreted.
#[tauri::command]
pub fn send_named_message(app: AppHandle, channel: String, data: serde_json::Value) -> IpcResponse {
    log::debug!("content message on '{}': {}", channel, data);
    match action_for_channel(&channel) {
        Some(action) => {
            dispatch(&app, ShellEvent::Hotkey(action));
            IpcResponse::success(format!("dispatched {}", channel))
        }
        None => {
            log::warn!("content sent message on disallowed channel '{}'", channel);
            IpcResponse::error(format!("channel '{}' is not allowed", channel))
        }
    }
}
