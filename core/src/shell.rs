//! The shell: one ordered event loop over registry, hotkeys, and
//! lifecycle.
//!
//! The host delivers [`ShellEvent`]s one at a time on a single control
//! thread; every registry mutation happens inside [`Shell::handle`], so
//! no locking discipline beyond that serialization is needed. Each event
//! observes the latest registry state — deferred show completions arrive
//! here as `ContentReady` and are re-evaluated against current intent.

use serde::Serialize;

use crate::host::{HotkeyHost, WindowHost};
use crate::hotkeys::{HotkeyAction, HotkeyRouter};
use crate::lifecycle::Lifecycle;
use crate::registry::WindowRegistry;
use crate::role::WindowRole;


/// Tray menu actions. The tray mirrors the hotkey surface and routes
/// through the same registry methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    ShowOverlay,
    HideOverlay,
    /// Direct click on the tray icon.
    ToggleOverlay,
    ToggleBrowser,
    Quit,
}


/// Everything that can happen to the shell, in host arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellEvent {
    /// Host runtime finished starting up.
    HostReady,
    Hotkey(HotkeyAction),
    Tray(TrayAction),
    /// Host reports the window for a role was closed/destroyed.
    WindowClosed(WindowRole),
    /// The content surface for a role finished its initial load.
    ContentReady(WindowRole),
    /// Platform reactivation (e.g. dock icon click) with the app alive.
    Activate,
    AllWindowsClosed,
    QuitRequested,
}


/// What the host should do after an event is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Continue,
    Exit,
}


/// Notification forwarded to subscribed web content after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleNotice {
    pub role: WindowRole,
    pub visible: bool,
}


pub struct Shell<W: WindowHost, K: HotkeyHost> {
    registry: WindowRegistry<W>,
    router: HotkeyRouter,
    hotkeys: K,
    lifecycle: Lifecycle,
    persistent_dock: bool,
    /// Notice produced by the last handled event, if it was a toggle.
    last_notice: Option<ToggleNotice>,
}


impl<W: WindowHost, K: HotkeyHost> Shell<W, K> {
    /// `persistent_dock` selects the all-windows-closed behaviour:
    /// platforms with a persistent dock idle instead of terminating.
    pub fn new(window_host: W, hotkey_host: K, dev: bool, persistent_dock: bool) -> Shell<W, K> {
        Shell {
            registry: WindowRegistry::new(window_host, dev),
            router: HotkeyRouter::new(),
            hotkeys: hotkey_host,
            lifecycle: Lifecycle::new(),
            persistent_dock,
            last_notice: None,
        }
    }

    pub fn registry(&self) -> &WindowRegistry<W> {
        &self.registry
    }

    pub fn router(&self) -> &HotkeyRouter {
        &self.router
    }

    /// The toggle notice produced by the most recent [`handle`](Self::handle)
    /// call, cleared on every call. The host forwards it to content.
    pub fn take_notice(&mut self) -> Option<ToggleNotice> {
        self.last_notice.take()
    }

    /// Process one event. Never blocks; never panics on stale state.
    pub fn handle(&mut self, event: ShellEvent) -> Directive {
        self.last_notice = None;
        log::debug!("shell event: {:?}", event);
        match event {
            ShellEvent::HostReady => {
                if self.lifecycle.on_host_ready() {
                    // Overlay exists from startup, hidden until toggled.
                    self.registry.ensure(WindowRole::Overlay);
                    self.router.bind_defaults(&mut self.hotkeys);
                }
                Directive::Continue
            }

            ShellEvent::Hotkey(action) => {
                self.lifecycle.mark_running();
                match action {
                    HotkeyAction::ToggleOverlay => self.toggle(WindowRole::Overlay),
                    HotkeyAction::ToggleBrowser => self.toggle(WindowRole::Browser),
                }
                Directive::Continue
            }

            ShellEvent::Tray(action) => {
                self.lifecycle.mark_running();
                match action {
                    TrayAction::ShowOverlay => self.registry.show(WindowRole::Overlay),
                    TrayAction::HideOverlay => self.registry.hide(WindowRole::Overlay),
                    TrayAction::ToggleOverlay => self.toggle(WindowRole::Overlay),
                    TrayAction::ToggleBrowser => self.toggle(WindowRole::Browser),
                    TrayAction::Quit => return self.quit(),
                }
                Directive::Continue
            }

            ShellEvent::WindowClosed(role) => {
                self.registry.handle_closed(role);
                Directive::Continue
            }

            ShellEvent::ContentReady(role) => {
                self.registry.handle_ready(role);
                Directive::Continue
            }

            ShellEvent::Activate => {
                if self
                    .lifecycle
                    .should_recreate_on_activate(self.registry.window_count())
                {
                    self.registry.ensure(WindowRole::Overlay);
                }
                Directive::Continue
            }

            ShellEvent::AllWindowsClosed => {
                if self.lifecycle.should_exit_on_all_closed(self.persistent_dock) {
                    self.quit()
                } else {
                    Directive::Continue
                }
            }

            ShellEvent::QuitRequested => self.quit(),
        }
    }

    fn toggle(&mut self, role: WindowRole) {
        self.registry.toggle(role);
        self.last_notice = Some(ToggleNotice {
            role,
            visible: self
                .registry
                .state(role)
                .map(|s| s.visible || s.show_pending)
                .unwrap_or(false),
        });
    }

    fn quit(&mut self) -> Directive {
        if self.lifecycle.begin_quit() {
            log::info!("quitting: releasing global hotkeys");
        }
        // Idempotent: late quit paths may land here again.
        self.router.unbind_all(&mut self.hotkeys);
        Directive::Exit
    }
}
