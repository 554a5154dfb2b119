//! Input-passthrough policy.
//!
//! A hidden window must never intercept pointer input, even if the host
//! accidentally paints it; a visible window captures all input. There is
//! no visible-but-forwarding state: visibility and interactivity are
//! toggled together by the registry's `show`/`hide`.

/// What the host should do with pointer input for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passthrough {
    /// Ignore pointer input entirely.
    pub ignore_input: bool,
    /// While ignoring, forward input to whatever is beneath the window.
    pub forward_when_ignored: bool,
}


impl Passthrough {
    /// Capture all pointer input.
    pub const CAPTURE: Passthrough = Passthrough {
        ignore_input: false,
        forward_when_ignored: false,
    };

    /// Ignore and forward pointer input.
    pub const FORWARD: Passthrough = Passthrough {
        ignore_input: true,
        forward_when_ignored: true,
    };
}


/// Map a window's visibility and interactivity intent to the host calls.
pub fn desired_passthrough(visible: bool, interactive: bool) -> Passthrough {
    if visible && interactive {
        Passthrough::CAPTURE
    } else {
        Passthrough::FORWARD
    }
}
