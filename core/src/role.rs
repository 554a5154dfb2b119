//! Window roles and their fixed creation parameters.
//!
//! OverHUD manages exactly two singleton window roles: the transparent
//! Overlay and the opaque Browser (the embedded mini-browser). Each role
//! has fixed geometry and a fixed content source; everything dynamic about
//! a window lives in the registry, not here.

use serde::{Deserialize, Serialize};

/// Dev server URL used by both roles in development builds.
pub const DEV_SERVER_URL: &str = "http://localhost:5173";

/// Bundled document for the Overlay role in production builds.
pub const OVERLAY_DOCUMENT: &str = "index.html";

/// Bundled document for the Browser role in production builds.
pub const BROWSER_DOCUMENT: &str = "browser.html";


/// A fixed logical purpose for a window. At most one live instance per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRole {
    Overlay,
    Browser,
}


impl WindowRole {
    /// Stable window label for this role (used as the host window label
    /// and to map host events back to a role).
    pub fn label(self) -> &'static str {
        match self {
            WindowRole::Overlay => "overlay",
            WindowRole::Browser => "browser",
        }
    }

    /// Reverse of [`label`](Self::label). `None` for labels this shell
    /// does not manage.
    pub fn from_label(label: &str) -> Option<WindowRole> {
        match label {
            "overlay" => Some(WindowRole::Overlay),
            "browser" => Some(WindowRole::Browser),
            _ => None,
        }
    }

    pub fn all() -> [WindowRole; 2] {
        [WindowRole::Overlay, WindowRole::Browser]
    }
}


/// Where a role's window loads its content from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// A document bundled with the application.
    Bundled(String),
    /// A local dev server URL (development builds only).
    DevServer(String),
}


/// Fixed creation parameters for one role's window.
///
/// Every window is frameless, always-on-top, and kept off the taskbar;
/// only transparency and content differ between roles. All windows start
/// hidden so the registry controls the first reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSpec {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub transparent: bool,
    pub resizable: bool,
    pub content: ContentSource,
}


impl RoleSpec {
    /// The fixed parameters for `role`. `dev` selects the dev server over
    /// the bundled document.
    ///
    /// Both roles use strict content isolation; the host must not relax
    /// security settings for either window.
    pub fn for_role(role: WindowRole, dev: bool) -> RoleSpec {
        let content = if dev {
            ContentSource::DevServer(DEV_SERVER_URL.to_string())
        } else {
            let doc = match role {
                WindowRole::Overlay => OVERLAY_DOCUMENT,
                WindowRole::Browser => BROWSER_DOCUMENT,
            };
            ContentSource::Bundled(doc.to_string())
        };

        RoleSpec {
            title: match role {
                WindowRole::Overlay => "OverHUD".into(),
                WindowRole::Browser => "OverHUD Browser".into(),
            },
            width: 800.0,
            height: 600.0,
            transparent: role == WindowRole::Overlay,
            resizable: true,
            content,
        }
    }
}


/// Top-left origin that centers a `win` sized window on a display whose
/// usable area starts at `screen_pos` and spans `screen_size`.
pub fn centered_origin(
    screen_pos: (i32, i32),
    screen_size: (u32, u32),
    win: (u32, u32),
) -> (i32, i32) {
    let x = screen_pos.0 + (screen_size.0 as i32 - win.0 as i32) / 2;
    let y = screen_pos.1 + (screen_size.1 as i32 - win.1 as i32) / 2;
    (x, y)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for role in WindowRole::all() {
            assert_eq!(WindowRole::from_label(role.label()), Some(role));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(WindowRole::from_label("main"), None);
        assert_eq!(WindowRole::from_label(""), None);
    }

    #[test]
    fn role_serde_uses_lowercase() {
        let json = serde_json::to_string(&WindowRole::Overlay).unwrap();
        assert_eq!(json, "\"overlay\"");
        let back: WindowRole = serde_json::from_str("\"browser\"").unwrap();
        assert_eq!(back, WindowRole::Browser);
    }

    #[test]
    fn overlay_is_transparent_browser_is_not() {
        let overlay = RoleSpec::for_role(WindowRole::Overlay, false);
        let browser = RoleSpec::for_role(WindowRole::Browser, false);
        assert!(overlay.transparent);
        assert!(!browser.transparent);
    }

    #[test]
    fn both_roles_are_800_by_600() {
        for role in WindowRole::all() {
            let spec = RoleSpec::for_role(role, false);
            assert_eq!(spec.width, 800.0);
            assert_eq!(spec.height, 600.0);
            assert!(spec.resizable);
        }
    }

    #[test]
    fn production_loads_bundled_documents() {
        let overlay = RoleSpec::for_role(WindowRole::Overlay, false);
        let browser = RoleSpec::for_role(WindowRole::Browser, false);
        assert_eq!(overlay.content, ContentSource::Bundled("index.html".into()));
        assert_eq!(browser.content, ContentSource::Bundled("browser.html".into()));
    }

    #[test]
    fn dev_loads_dev_server() {
        for role in WindowRole::all() {
            let spec = RoleSpec::for_role(role, true);
            assert_eq!(
                spec.content,
                ContentSource::DevServer(DEV_SERVER_URL.into())
            );
        }
    }

    #[test]
    fn centered_origin_on_primary() {
        // 1920x1080 screen at origin, 800x600 window
        assert_eq!(
            centered_origin((0, 0), (1920, 1080), (800, 600)),
            (560, 240)
        );
    }

    #[test]
    fn centered_origin_respects_screen_offset() {
        assert_eq!(
            centered_origin((100, 50), (1920, 1080), (800, 600)),
            (660, 290)
        );
    }

    #[test]
    fn centered_origin_window_larger_than_screen() {
        // Window wider than the screen ends up left of the origin.
        let (x, _) = centered_origin((0, 0), (640, 480), (800, 600));
        assert!(x < 0);
    }
}
