//! Process lifecycle coordination.
//!
//! `Starting → Ready → Running → Quitting`, with the two platform rules:
//! reactivation re-creates the overlay when no windows remain, and
//! all-windows-closed terminates only on platforms without a persistent
//! dock.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Ready,
    Running,
    Quitting,
}


pub struct Lifecycle {
    phase: Phase,
}


impl Lifecycle {
    pub fn new() -> Lifecycle {
        Lifecycle {
            phase: Phase::Starting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Host signalled readiness. Returns true only on the first call;
    /// the caller then builds the overlay, hotkeys, and tray.
    pub fn on_host_ready(&mut self) -> bool {
        if self.phase == Phase::Starting {
            self.phase = Phase::Ready;
            true
        } else {
            false
        }
    }

    /// First user-visible action after readiness.
    pub fn mark_running(&mut self) {
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
    }

    /// Reactivation rule: re-create the overlay iff the process is still
    /// alive and no windows are registered.
    pub fn should_recreate_on_activate(&self, window_count: usize) -> bool {
        self.phase != Phase::Quitting && window_count == 0
    }

    /// All windows closed: terminate unless the platform keeps the
    /// process alive in a persistent dock.
    pub fn should_exit_on_all_closed(&self, persistent_dock: bool) -> bool {
        !persistent_dock
    }

    /// Enter the quitting phase. True only on the first transition, so
    /// shutdown work (hotkey release) runs once.
    pub fn begin_quit(&mut self) -> bool {
        if self.phase == Phase::Quitting {
            return false;
        }
        self.phase = Phase::Quitting;
        true
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_ready_fires_once() {
        let mut lc = Lifecycle::new();
        assert_eq!(lc.phase(), Phase::Starting);
        assert!(lc.on_host_ready());
        assert_eq!(lc.phase(), Phase::Ready);
        assert!(!lc.on_host_ready(), "second ready must not re-initialise");
    }

    #[test]
    fn mark_running_only_from_ready() {
        let mut lc = Lifecycle::new();
        lc.mark_running();
        assert_eq!(lc.phase(), Phase::Starting);
        lc.on_host_ready();
        lc.mark_running();
        assert_eq!(lc.phase(), Phase::Running);
    }

    #[test]
    fn activate_recreates_only_with_zero_windows() {
        let mut lc = Lifecycle::new();
        lc.on_host_ready();
        assert!(lc.should_recreate_on_activate(0));
        assert!(!lc.should_recreate_on_activate(1));
        assert!(!lc.should_recreate_on_activate(2));
    }

    #[test]
    fn no_recreation_while_quitting() {
        let mut lc = Lifecycle::new();
        lc.on_host_ready();
        lc.begin_quit();
        assert!(!lc.should_recreate_on_activate(0));
    }

    #[test]
    fn all_closed_exits_without_persistent_dock() {
        let lc = Lifecycle::new();
        assert!(lc.should_exit_on_all_closed(false));
        assert!(!lc.should_exit_on_all_closed(true));
    }

    #[test]
    fn begin_quit_true_only_once() {
        let mut lc = Lifecycle::new();
        lc.on_host_ready();
        assert!(lc.begin_quit());
        assert!(!lc.begin_quit());
        assert_eq!(lc.phase(), Phase::Quitting);
    }
}
