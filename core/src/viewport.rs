/// Request to send to the host fullscreen capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportCommand {
    EnterFullscreen,
    ExitFullscreen,
}

/// Fullscreen flag derived solely from host change notifications. `toggle`
/// never mutates the flag; a request that the host rejects, or an exit the
/// host performs on its own (Escape), both converge through `host_changed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportState {
    fullscreen: bool,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn toggle(&self) -> ViewportCommand {
        if self.fullscreen {
            ViewportCommand::ExitFullscreen
        } else {
            ViewportCommand::EnterFullscreen
        }
    }

    /// Host-level fullscreen-change notification. Returns true when the
    /// flag actually changed.
    pub fn host_changed(&mut self, active: bool) -> bool {
        if self.fullscreen == active {
            return false;
        }
        self.fullscreen = active;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_a_pure_request() {
        let mut state = ViewportState::new();
        assert_eq!(state.toggle(), ViewportCommand::EnterFullscreen);
        // The request alone changes nothing.
        assert!(!state.is_fullscreen());
        assert!(state.host_changed(true));
        assert!(state.is_fullscreen());
        assert_eq!(state.toggle(), ViewportCommand::ExitFullscreen);
    }

    #[test]
    fn host_exit_converges_without_a_request() {
        let mut state = ViewportState::new();
        state.host_changed(true);
        // Escape handled by the browser, no widget involvement.
        assert!(state.host_changed(false));
        assert!(!state.is_fullscreen());
        assert!(!state.host_changed(false));
    }
}
