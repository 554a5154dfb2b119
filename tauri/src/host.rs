//! Tauri implementations of the core's host capability traits.
//!
//! `TauriWindowHost` builds and drives the actual webview windows;
//! `TauriHotkeyHost` maps hotkey actions to typed global shortcuts. Both
//! hold an `AppHandle` and nothing else, so the shell state stays
//! `Send + Sync` behind one mutex.

use overhud_core::host::{HostError, HotkeyHost, WindowHost};
use overhud_core::hotkeys::{HotkeyAction, HotkeyBinding};
use overhud_core::passthrough::Passthrough;
use overhud_core::role::{centered_origin, ContentSource, RoleSpec, WindowRole};
use tauri::{AppHandle, PhysicalPosition, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_global_shortcut::{Code, GlobalShortcutExt, Modifiers, Shortcut};


/// The typed global shortcut for a hotkey action.
pub fn shortcut_for(action: HotkeyAction) -> Shortcut {
    match action {
        HotkeyAction::ToggleOverlay => {
            Shortcut::new(Some(Modifiers::CONTROL | Modifiers::ALT), Code::KeyH)
        }
        HotkeyAction::ToggleBrowser => {
            Shortcut::new(Some(Modifiers::CONTROL | Modifiers::ALT), Code::KeyG)
        }
    }
}


pub struct TauriWindowHost {
    app: AppHandle,
}


impl TauriWindowHost {
    pub fn new(app: AppHandle) -> TauriWindowHost {
        TauriWindowHost { app }
    }

    /// Center `spec`-sized windows on the primary monitor. `None` when no
    /// monitor can be queried; the window then keeps the host's default
    /// placement.
    fn centered_position(&self, spec: &RoleSpec) -> Option<PhysicalPosition<i32>> {
        let monitor = self.app.primary_monitor().ok().flatten()?;
        let size = monitor.size();
        let pos = monitor.position();
        let scale = monitor.scale_factor();
        let win_w = (spec.width * scale) as u32;
        let win_h = (spec.height * scale) as u32;
        let (x, y) = centered_origin(
            (pos.x, pos.y),
            (size.width, size.height),
            (win_w, win_h),
        );
        Some(PhysicalPosition::new(x, y))
    }
}


impl WindowHost for TauriWindowHost {
    type Handle = WebviewWindow;

    fn create(&mut self, role: WindowRole, spec: &RoleSpec) -> Result<WebviewWindow, HostError> {
        let url = match &spec.content {
            ContentSource::Bundled(doc) => WebviewUrl::App(doc.into()),
            ContentSource::DevServer(url) => WebviewUrl::External(
                url.parse()
                    .map_err(|e| HostError::CreateWindow(format!("bad dev url {}: {}", url, e)))?,
            ),
        };

        let window = WebviewWindowBuilder::new(&self.app, role.label(), url)
            .title(&spec.title)
            .inner_size(spec.width, spec.height)
            .transparent(spec.transparent)
            .decorations(false)
            .always_on_top(true)
            .skip_taskbar(true)
            .resizable(spec.resizable)
            .shadow(false)
            .visible(false)
            .focused(false)
            .build()
            .map_err(|e| HostError::CreateWindow(e.to_string()))?;

        if let Some(pos) = self.centered_position(spec) {
            if let Err(e) = window.set_position(pos) {
                log::warn!("failed to center {} window: {}", role.label(), e);
            }
        } else {
            log::warn!("no primary monitor; {} keeps default placement", role.label());
        }

        Ok(window)
    }

    fn show(&mut self, handle: &WebviewWindow) {
        if let Err(e) = handle.show() {
            log::warn!("show({}) failed: {}", handle.label(), e);
        }
        if let Err(e) = handle.set_focus() {
            log::warn!("set_focus({}) failed: {}", handle.label(), e);
        }
    }

    fn hide(&mut self, handle: &WebviewWindow) {
        if let Err(e) = handle.hide() {
            log::warn!("hide({}) failed: {}", handle.label(), e);
        }
    }

    fn set_passthrough(&mut self, handle: &WebviewWindow, passthrough: Passthrough) {
        // Tauri exposes no forward flag; while ignoring, the platform
        // forwards to whatever is beneath, which matches the policy's
        // forward_when_ignored pairing.
        if let Err(e) = handle.set_ignore_cursor_events(passthrough.ignore_input) {
            log::warn!("set_ignore_cursor_events({}) failed: {}", handle.label(), e);
        }
    }
}


pub struct TauriHotkeyHost {
    app: AppHandle,
}


impl TauriHotkeyHost {
    pub fn new(app: AppHandle) -> TauriHotkeyHost {
        TauriHotkeyHost { app }
    }
}


impl HotkeyHost for TauriHotkeyHost {
    fn register(&mut self, binding: &HotkeyBinding) -> Result<(), HostError> {
        self.app
            .global_shortcut()
            .register(shortcut_for(binding.action))
            .map_err(|e| HostError::RegisterHotkey(e.to_string()))
    }

    fn unregister(&mut self, binding: &HotkeyBinding) -> Result<(), HostError> {
        self.app
            .global_shortcut()
            .unregister(shortcut_for(binding.action))
            .map_err(|e| HostError::UnregisterHotkey(e.to_string()))
    }
}
