//! OverHUD Tauri application library.
//!
//! This crate is the host shell around `overhud-core`: it implements the
//! core's window and hotkey traits on top of Tauri, and translates host
//! events (fired shortcuts, tray clicks, window destruction, page loads,
//! run-loop signals) into the core's single ordered event stream.
//!
//! # Architecture
//!
//! 1. **ShellState** (this module) -- wraps the core `Shell` in a `Mutex`
//!    so every event handler serializes through one control point.
//!
//! 2. **`host`** -- `WindowHost`/`HotkeyHost` impls over `WebviewWindow`
//!    and the global-shortcut plugin.
//!
//! 3. **`tray`** / **`ipc`** -- the tray control surface and the narrow
//!    command surface exposed to web content.
//!
//! 4. **`run()`** -- assembles the Tauri application and drives the
//!    run-event loop.

pub mod host;
pub mod ipc;
pub mod tray;

use std::sync::Mutex;

use overhud_core::hotkeys::HotkeyAction;
use overhud_core::role::WindowRole;
use overhud_core::shell::{Directive, Shell, ShellEvent};
use tauri::{AppHandle, Emitter, Manager, RunEvent, WindowEvent};

use host::{TauriHotkeyHost, TauriWindowHost};


/// The core shell behind one mutex. All host callbacks funnel through
/// this, which gives the single-threaded ordering the core assumes.
pub type ShellState = Mutex<Shell<TauriWindowHost, TauriHotkeyHost>>;


/// Handle one shell event and forward any toggle notice to content.
///
/// Returns the shell's directive without acting on it; use [`dispatch`]
/// from paths where an `Exit` should terminate the app.
pub fn handle_event(app: &AppHandle, event: ShellEvent) -> Directive {
    let Some(state) = app.try_state::<ShellState>() else {
        log::warn!("event {:?} before shell construction", event);
        return Directive::Continue;
    };
    let mut shell = state.lock().unwrap();
    let directive = shell.handle(event);
    let notice = shell.take_notice();
    drop(shell);

    if let Some(notice) = notice {
        let channel = match notice.role {
            WindowRole::Overlay => ipc::EVENT_TOGGLE_OVERLAY,
            WindowRole::Browser => ipc::EVENT_OPEN_BROWSER,
        };
        if let Err(e) = app.emit(channel, notice) {
            log::warn!("failed to emit {}: {}", channel, e);
        }
    }

    directive
}


/// [`handle_event`], exiting the app when the shell says so. This is the
/// entry point for hotkey, tray, IPC, and window events; the run-event
/// loop calls [`handle_event`] directly because exit is already in
/// progress there.
pub fn dispatch(app: &AppHandle, event: ShellEvent) {
    if handle_event(app, event) == Directive::Exit {
        app.exit(0);
    }
}


/// Assemble and run the Tauri application.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dev = cfg!(debug_assertions);
    let persistent_dock = cfg!(target_os = "macos");

    let app = tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![ipc::send_named_message])
        .on_page_load(|webview, payload| {
            if !matches!(payload.event(), tauri::webview::PageLoadEvent::Finished) {
                return;
            }
            let Some(role) = WindowRole::from_label(webview.label()) else {
                return;
            };
            #[cfg(debug_assertions)]
            webview.open_devtools();
            dispatch(webview.app_handle(), ShellEvent::ContentReady(role));
        })
        .setup(move |app| {
            let shell = Shell::new(
                TauriWindowHost::new(app.handle().clone()),
                TauriHotkeyHost::new(app.handle().clone()),
                dev,
                persistent_dock,
            );
            app.manage(ShellState::new(shell));

            // The plugin must be live before HostReady registers shortcuts.
            {
                use tauri_plugin_global_shortcut::ShortcutState;

                app.handle().plugin(
                    tauri_plugin_global_shortcut::Builder::new()
                        .with_handler(move |app, fired, event| {
                            if !matches!(event.state(), ShortcutState::Pressed) {
                                return;
                            }
                            for action in
                                [HotkeyAction::ToggleOverlay, HotkeyAction::ToggleBrowser]
                            {
                                if fired == &host::shortcut_for(action) {
                                    dispatch(app, ShellEvent::Hotkey(action));
                                }
                            }
                        })
                        .build(),
                )?;
            }

            // Eager hidden overlay + hotkey bindings.
            dispatch(app.handle(), ShellEvent::HostReady);

            if let Err(e) = tray::setup(app) {
                log::warn!("tray unavailable, continuing without it: {}", e);
            }

            log::info!("setup complete");
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app, event| match event {
        RunEvent::WindowEvent {
            label,
            event: WindowEvent::Destroyed,
            ..
        } => {
            if let Some(role) = WindowRole::from_label(&label) {
                let _ = handle_event(app, ShellEvent::WindowClosed(role));
            }
        }

        RunEvent::ExitRequested { code, api, .. } => {
            // code None means the last window closed; anything else is an
            // explicit quit. The shell decides whether closing all
            // windows terminates or idles on this platform.
            let event = if code.is_none() {
                ShellEvent::AllWindowsClosed
            } else {
                ShellEvent::QuitRequested
            };
            if handle_event(app, event) == Directive::Continue && code.is_none() {
                api.prevent_exit();
            }
        }

        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            let _ = handle_event(app, ShellEvent::Activate);
        }

        RunEvent::Exit => {
            // Final safety net: hotkey release is idempotent, so this is
            // harmless when a quit path already ran.
            let _ = handle_event(app, ShellEvent::QuitRequested);
        }

        _ => {}
    });
}
