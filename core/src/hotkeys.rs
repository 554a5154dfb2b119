//! Global hotkey routing.
//!
//! Two bindings are defined for this system: toggle-overlay and
//! toggle-browser. Registration is per-binding best-effort: a combo
//! already owned by another process is logged and skipped without
//! blocking the others. All bindings are released en masse at shutdown.

use serde::{Deserialize, Serialize};

use crate::host::HotkeyHost;


/// What a fired hotkey does. Tray entries reuse the same actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HotkeyAction {
    ToggleOverlay,
    ToggleBrowser,
}


/// One (combo, action) pair. The combo string is the canonical display
/// form; hosts may map the action to their own typed shortcut value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyBinding {
    pub combo: String,
    pub action: HotkeyAction,
}


/// The fixed keyboard surface of this system.
pub fn default_bindings() -> Vec<HotkeyBinding> {
    vec![
        HotkeyBinding {
            combo: "Ctrl+Alt+H".into(),
            action: HotkeyAction::ToggleOverlay,
        },
        HotkeyBinding {
            combo: "Ctrl+Alt+G".into(),
            action: HotkeyAction::ToggleBrowser,
        },
    ]
}


/// Tracks which bindings were actually registered so shutdown releases
/// exactly those and nothing else.
#[derive(Default)]
pub struct HotkeyRouter {
    bound: Vec<HotkeyBinding>,
}


impl HotkeyRouter {
    pub fn new() -> HotkeyRouter {
        HotkeyRouter::default()
    }

    /// Attempt global registration of `binding`. Failure is logged and
    /// tolerated; returns whether the binding is now active.
    pub fn bind<H: HotkeyHost>(&mut self, host: &mut H, binding: HotkeyBinding) -> bool {
        match host.register(&binding) {
            Ok(()) => {
                log::info!("registered global hotkey {} ({:?})", binding.combo, binding.action);
                self.bound.push(binding);
                true
            }
            Err(e) => {
                log::warn!("failed to register {}: {}", binding.combo, e);
                false
            }
        }
    }

    /// Register the system's default bindings.
    pub fn bind_defaults<H: HotkeyHost>(&mut self, host: &mut H) {
        for binding in default_bindings() {
            self.bind(host, binding);
        }
    }

    /// Release every binding this router registered. Idempotent: safe to
    /// call again after everything is already released.
    pub fn unbind_all<H: HotkeyHost>(&mut self, host: &mut H) {
        for binding in self.bound.drain(..) {
            if let Err(e) = host.unregister(&binding) {
                log::warn!("failed to release {}: {}", binding.combo, e);
            }
        }
    }

    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }
}
