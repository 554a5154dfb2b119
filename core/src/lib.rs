//! OverHUD core — the window-lifecycle and input-passthrough state machine.
//!
//! This crate holds everything that can be reasoned about without a real
//! windowing runtime: which windows exist, whether they are shown, and
//! whether they currently capture or forward pointer input. The host
//! runtime (the Tauri shell in the `overhud` crate) is reached only
//! through the [`host::WindowHost`] and [`host::HotkeyHost`] traits, so
//! the whole state machine is unit-testable with recording fakes.
//!
//! # Architecture
//!
//! 1. **`passthrough`** -- pure policy mapping visibility + interactivity
//!    to the host's ignore-input call.
//!
//! 2. **`registry`** -- exclusive owner of the role→window mapping; at
//!    most one live handle per [`role::WindowRole`] at any time.
//!
//! 3. **`hotkeys`** / **`lifecycle`** -- global shortcut bookkeeping and
//!    the process phase machine.
//!
//! 4. **`shell`** -- the single ordered event loop tying it all together;
//!    the host delivers [`shell::ShellEvent`]s one at a time.

pub mod host;
pub mod hotkeys;
pub mod lifecycle;
pub mod passthrough;
pub mod registry;
pub mod role;
pub mod shell;
