//! System tray control surface.
//!
//! The tray mirrors the hotkey actions: every entry routes through the
//! same shell event path, so toggle semantics are defined in exactly one
//! place. Construction is best-effort; the caller logs a failure and the
//! shell keeps running without a tray.

use overhud_core::shell::{ShellEvent, TrayAction};
use tauri::{
    menu::{MenuBuilder, MenuItemBuilder},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    App, Manager,
};

use crate::dispatch;


/// Menu item IDs used by the tray icon menu.
pub mod tray_menu_ids {
    pub const SHOW_OVERLAY: &str = "show-overlay";
    pub const HIDE_OVERLAY: &str = "hide-overlay";
    pub const OPEN_BROWSER: &str = "open-browser";
    pub const QUIT: &str = "quit";
}


/// Build the tray icon and its static menu.
pub fn setup(app: &App) -> tauri::Result<()> {
    let show_item =
        MenuItemBuilder::with_id(tray_menu_ids::SHOW_OVERLAY, "Show Overlay").build(app)?;
    let hide_item =
        MenuItemBuilder::with_id(tray_menu_ids::HIDE_OVERLAY, "Hide Overlay").build(app)?;
    let browser_item =
        MenuItemBuilder::with_id(tray_menu_ids::OPEN_BROWSER, "Open Browser").build(app)?;
    let quit_item = MenuItemBuilder::with_id(tray_menu_ids::QUIT, "Quit OverHUD").build(app)?;

    let menu = MenuBuilder::new(app)
        .item(&show_item)
        .item(&hide_item)
        .separator()
        .item(&browser_item)
        .separator()
        .item(&quit_item)
        .build()?;

    let mut builder = TrayIconBuilder::new()
        .tooltip("OverHUD")
        .menu(&menu)
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            let action = match event.id().as_ref() {
                tray_menu_ids::SHOW_OVERLAY => TrayAction::ShowOverlay,
                tray_menu_ids::HIDE_OVERLAY => TrayAction::HideOverlay,
                tray_menu_ids::OPEN_BROWSER => TrayAction::ToggleBrowser,
                tray_menu_ids::QUIT => TrayAction::Quit,
                other => {
                    log::debug!("unhandled tray menu item: {}", other);
                    return;
                }
            };
            dispatch(app, ShellEvent::Tray(action));
        })
        .on_tray_icon_event(|tray, event| {
            // A plain left click on the icon toggles the overlay, same
            // path as the hotkey.
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                dispatch(tray.app_handle(), ShellEvent::Tray(TrayAction::ToggleOverlay));
            }
        });

    if let Some(icon) = app.default_window_icon().cloned() {
        builder = builder.icon(icon);
    }
    let _tray = builder.build(app)?;
    Ok(())
}
