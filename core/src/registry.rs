//! Window registry — exclusive owner of the role→window mapping.
//!
//! Invariant: at most one live handle per [`WindowRole`]. Every public
//! operation is a best-effort command: stale-handle use (an operation on
//! a role whose window the host already closed) is a safe no-op, and
//! host failures are logged rather than propagated.

use std::collections::HashMap;

use crate::host::WindowHost;
use crate::passthrough::desired_passthrough;
use crate::role::{RoleSpec, WindowRole};


/// Observable state of one live window, for the lifecycle coordinator,
/// the IPC layer, and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleState {
    pub visible: bool,
    pub interactive: bool,
    pub ready: bool,
    pub show_pending: bool,
}


struct RoleEntry<T> {
    handle: T,
    visible: bool,
    interactive: bool,
    /// Content surface has signalled readiness at least once.
    ready: bool,
    /// A show request arrived before readiness and is waiting to apply.
    show_pending: bool,
}

impl<T> RoleEntry<T> {
    /// Whether the window is shown or about to be shown. Toggle branches
    /// on this, not on raw visibility, so a toggle issued while a show is
    /// still deferred behaves as a hide rather than a second show.
    fn effectively_shown(&self) -> bool {
        self.visible || self.show_pending
    }
}


pub struct WindowRegistry<H: WindowHost> {
    host: H,
    entries: HashMap<WindowRole, RoleEntry<H::Handle>>,
    dev: bool,
}


impl<H: WindowHost> WindowRegistry<H> {
    pub fn new(host: H, dev: bool) -> WindowRegistry<H> {
        WindowRegistry {
            host,
            entries: HashMap::new(),
            dev,
        }
    }

    /// Create the window for `role` if it does not exist yet.
    ///
    /// New windows start hidden and non-interactive with pointer input
    /// forwarded, and stay that way until a `show` request applies.
    /// Creation failure is logged; the role remains absent.
    pub fn ensure(&mut self, role: WindowRole) {
        if self.entries.contains_key(&role) {
            return;
        }
        let spec = RoleSpec::for_role(role, self.dev);
        match self.host.create(role, &spec) {
            Ok(handle) => {
                self.host
                    .set_passthrough(&handle, desired_passthrough(false, false));
                self.entries.insert(
                    role,
                    RoleEntry {
                        handle,
                        visible: false,
                        interactive: false,
                        ready: false,
                        show_pending: false,
                    },
                );
                log::info!("created {} window (hidden)", role.label());
            }
            Err(e) => {
                log::error!("failed to create {} window: {}", role.label(), e);
            }
        }
    }

    /// Request visible + interactive for `role`, creating it on demand.
    ///
    /// If the content surface is not ready yet the request is recorded and
    /// applied when readiness arrives, so a blank window never flashes.
    pub fn show(&mut self, role: WindowRole) {
        self.ensure(role);
        let Some(entry) = self.entries.get_mut(&role) else {
            return; // creation failed, already logged
        };
        if !entry.ready {
            log::debug!("{} not ready yet, deferring show", role.label());
            entry.show_pending = true;
            return;
        }
        entry.visible = true;
        entry.interactive = true;
        entry.show_pending = false;
        self.host.show(&entry.handle);
        self.host
            .set_passthrough(&entry.handle, desired_passthrough(true, true));
    }

    /// Hide `role` and restore input forwarding. No-op when the role has
    /// no live window. Cancels any deferred show.
    pub fn hide(&mut self, role: WindowRole) {
        let Some(entry) = self.entries.get_mut(&role) else {
            log::debug!("hide({}) ignored: no live window", role.label());
            return;
        };
        entry.show_pending = false;
        entry.visible = false;
        entry.interactive = false;
        self.host.hide(&entry.handle);
        self.host
            .set_passthrough(&entry.handle, desired_passthrough(false, false));
    }

    /// The single definition of toggle semantics: absent ⇒ show,
    /// effectively shown ⇒ hide, hidden ⇒ show. Hotkeys and the tray
    /// both route through here.
    pub fn toggle(&mut self, role: WindowRole) {
        match self.entries.get(&role) {
            None => self.show(role),
            Some(entry) if entry.effectively_shown() => self.hide(role),
            Some(_) => self.show(role),
        }
    }

    /// Clear the stored handle without touching the window. Used only
    /// when the host has already reported closure; any deferred show for
    /// the role dies with the entry.
    pub fn release(&mut self, role: WindowRole) {
        if self.entries.remove(&role).is_some() {
            log::info!("released {} window", role.label());
        }
    }

    /// Host close notification for `role`.
    pub fn handle_closed(&mut self, role: WindowRole) {
        self.release(role);
    }

    /// Content-ready notification for `role`.
    ///
    /// Re-reads the current intent at fire time: the user may have hidden
    /// the window again while content was loading, and the role may have
    /// been released entirely. Only a still-pending show is applied.
    pub fn handle_ready(&mut self, role: WindowRole) {
        let Some(entry) = self.entries.get_mut(&role) else {
            log::debug!("ready({}) ignored: window already released", role.label());
            return;
        };
        entry.ready = true;
        if entry.show_pending {
            self.show(role);
        }
    }

    /// Number of live windows across all roles.
    pub fn window_count(&self) -> usize {
        self.entries.len()
    }

    pub fn state(&self, role: WindowRole) -> Option<RoleState> {
        self.entries.get(&role).map(|e| RoleState {
            visible: e.visible,
            interactive: e.interactive,
            ready: e.ready,
            show_pending: e.show_pending,
        })
    }

    /// The live handle for `role`, if any.
    pub fn handle(&self, role: WindowRole) -> Option<&H::Handle> {
        self.entries.get(&role).map(|e| &e.handle)
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{FakeHandle, FakeWindowHost, HostCall};
    use crate::passthrough::Passthrough;
    use crate::role::WindowRole::{Browser, Overlay};

    fn registry() -> WindowRegistry<FakeWindowHost> {
        WindowRegistry::new(FakeWindowHost::default(), false)
    }

    /// Registry with a window for `role` that has already signalled ready.
    fn ready_registry(role: WindowRole) -> WindowRegistry<FakeWindowHost> {
        let mut reg = registry();
        reg.ensure(role);
        reg.handle_ready(role);
        reg
    }

    #[test]
    fn ensure_creates_hidden_and_forwarding() {
        let mut reg = registry();
        reg.ensure(Overlay);

        let state = reg.state(Overlay).unwrap();
        assert!(!state.visible);
        assert!(!state.interactive);
        assert_eq!(
            reg.host().calls,
            vec![
                HostCall::Create(Overlay),
                HostCall::SetPassthrough(Overlay, Passthrough::FORWARD),
            ]
        );
    }

    #[test]
    fn ensure_is_single_instance() {
        let mut reg = registry();
        reg.ensure(Overlay);
        reg.ensure(Overlay);
        reg.ensure(Overlay);
        assert_eq!(reg.host().created(Overlay), 1);
        assert_eq!(reg.window_count(), 1);
    }

    #[test]
    fn roles_are_independent() {
        let mut reg = registry();
        reg.ensure(Overlay);
        reg.ensure(Browser);
        assert_eq!(reg.window_count(), 2);
        assert_eq!(reg.host().created(Overlay), 1);
        assert_eq!(reg.host().created(Browser), 1);
    }

    #[test]
    fn failed_creation_leaves_role_absent() {
        let mut reg = WindowRegistry::new(FakeWindowHost::failing(), false);
        reg.show(Overlay);
        assert_eq!(reg.window_count(), 0);
        assert!(reg.state(Overlay).is_none());
    }

    #[test]
    fn failed_creation_does_not_reach_the_host_window_calls() {
        // toggle/hide after a refused creation must stay safe no-ops.
        let mut reg = WindowRegistry::new(FakeWindowHost::failing(), false);
        reg.toggle(Overlay);
        reg.hide(Overlay);
        assert_eq!(reg.window_count(), 0);
        assert!(reg.host().calls.is_empty());
    }

    #[test]
    fn show_after_ready_captures_input() {
        let mut reg = ready_registry(Overlay);
        reg.show(Overlay);

        let state = reg.state(Overlay).unwrap();
        assert!(state.visible);
        assert!(state.interactive);
        assert_eq!(
            reg.host().calls.last(),
            Some(&HostCall::SetPassthrough(Overlay, Passthrough::CAPTURE))
        );
        assert_eq!(reg.host().shown(Overlay), 1);
    }

    #[test]
    fn show_before_ready_defers() {
        let mut reg = registry();
        reg.show(Browser);

        let state = reg.state(Browser).unwrap();
        assert!(!state.visible, "must not show a blank window");
        assert!(state.show_pending);
        assert_eq!(reg.host().shown(Browser), 0);

        reg.handle_ready(Browser);
        let state = reg.state(Browser).unwrap();
        assert!(state.visible);
        assert!(state.interactive);
        assert_eq!(reg.host().shown(Browser), 1);
    }

    #[test]
    fn hide_before_ready_cancels_deferred_show() {
        // show(Browser), then hide(Browser) while content is loading:
        // when ready fires the window must stay hidden — no flash.
        let mut reg = registry();
        reg.show(Browser);
        reg.hide(Browser);
        reg.handle_ready(Browser);

        let state = reg.state(Browser).unwrap();
        assert!(!state.visible);
        assert!(!state.show_pending);
        assert_eq!(reg.host().shown(Browser), 0);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut reg = ready_registry(Overlay);
        reg.show(Overlay);
        reg.hide(Overlay);
        let once = reg.state(Overlay).unwrap();
        reg.hide(Overlay);
        let twice = reg.state(Overlay).unwrap();
        assert_eq!(once, twice);
        assert!(!twice.visible);
        assert!(!twice.interactive);
        assert_eq!(
            reg.host().calls.last(),
            Some(&HostCall::SetPassthrough(Overlay, Passthrough::FORWARD))
        );
    }

    #[test]
    fn hide_without_window_is_noop() {
        let mut reg = registry();
        reg.hide(Browser);
        assert!(reg.host().calls.is_empty());
        assert_eq!(reg.window_count(), 0);
    }

    #[test]
    fn toggle_twice_round_trips_from_live_states() {
        let mut reg = ready_registry(Overlay);

        // hidden -> visible -> hidden
        reg.toggle(Overlay);
        assert!(reg.state(Overlay).unwrap().visible);
        reg.toggle(Overlay);
        assert!(!reg.state(Overlay).unwrap().visible);

        // visible -> hidden -> visible
        reg.show(Overlay);
        reg.toggle(Overlay);
        reg.toggle(Overlay);
        assert!(reg.state(Overlay).unwrap().visible);
    }

    #[test]
    fn toggle_from_no_handle_is_asymmetric() {
        // First toggle creates + requests show; the second hides, leaving
        // a live-but-hidden window rather than no window at all.
        let mut reg = registry();
        reg.toggle(Browser);
        assert_eq!(reg.window_count(), 1);
        assert!(reg.state(Browser).unwrap().show_pending);

        reg.toggle(Browser);
        assert_eq!(reg.window_count(), 1, "second toggle must not destroy");
        let state = reg.state(Browser).unwrap();
        assert!(!state.visible);
        assert!(!state.show_pending);
    }

    #[test]
    fn toggle_while_show_pending_hides() {
        let mut reg = registry();
        reg.show(Browser);
        reg.toggle(Browser);
        reg.handle_ready(Browser);
        assert!(!reg.state(Browser).unwrap().visible);
        assert_eq!(reg.host().shown(Browser), 0);
    }

    #[test]
    fn release_then_operations_are_noops() {
        let mut reg = ready_registry(Browser);
        reg.handle_closed(Browser);
        assert_eq!(reg.window_count(), 0);

        let calls_before = reg.host().calls.len();
        reg.hide(Browser);
        reg.handle_ready(Browser);
        assert_eq!(reg.host().calls.len(), calls_before, "stale ops must not reach the host");
    }

    #[test]
    fn stale_ready_after_release_is_noop() {
        let mut reg = registry();
        reg.show(Browser); // deferred
        reg.handle_closed(Browser);
        reg.handle_ready(Browser); // continuation fires after release
        assert!(reg.state(Browser).is_none());
        assert_eq!(reg.host().shown(Browser), 0);
    }

    #[test]
    fn recreate_after_close_builds_fresh_handle() {
        let mut reg = registry();
        reg.show(Browser);
        let first = reg.handle(Browser).cloned().unwrap();
        reg.handle_closed(Browser);

        reg.show(Browser);
        let second: FakeHandle = reg.handle(Browser).cloned().unwrap();
        assert_ne!(first.id, second.id, "no state survives destroy/recreate");
        assert!(!reg.state(Browser).unwrap().ready, "fresh window loads from scratch");
    }

    #[test]
    fn ready_is_sticky_per_handle() {
        let mut reg = ready_registry(Overlay);
        reg.hide(Overlay);
        // A later show applies immediately, no second ready needed.
        reg.show(Overlay);
        assert!(reg.state(Overlay).unwrap().visible);
    }
}
