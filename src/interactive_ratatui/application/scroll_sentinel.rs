/// A source of discrete "reached bottom" events.
pub trait ContinuationSignal {
    /// Returns `true` once per raised signal.
    fn take_signal(&mut self) -> bool;
}

/// Edge-triggered visibility tracker for the marker below the last item.
///
/// A signal is raised when the marker goes from hidden to visible, never
/// while it merely stays on screen.
#[derive(Debug, Default)]
pub struct ScrollSentinel {
    visible: bool,
    pending: bool,
}

impl ScrollSentinel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the marker's current visibility. Returns whether this
    /// observation raised a signal.
    pub fn observe(&mut self, visible: bool) -> bool {
        let entered = visible && !self.visible;
        self.visible = visible;
        if entered {
            self.pending = true;
        }
        entered
    }

    /// Treat the marker as hidden again, e.g. after the list grew and the
    /// marker moved.
    pub fn reset(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl ContinuationSignal for ScrollSentinel {
    fn take_signal(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_on_entering_view() {
        let mut sentinel = ScrollSentinel::new();

        assert!(!sentinel.observe(false));
        assert!(!sentinel.take_signal());

        assert!(sentinel.observe(true));
        assert!(sentinel.take_signal());
        assert!(!sentinel.take_signal());
    }

    #[test]
    fn test_no_repeat_while_visible() {
        let mut sentinel = ScrollSentinel::new();

        assert!(sentinel.observe(true));
        assert!(!sentinel.observe(true));
        assert!(!sentinel.observe(true));

        // Only one signal queued despite three observations
        assert!(sentinel.take_signal());
        assert!(!sentinel.take_signal());
    }

    #[test]
    fn test_fires_again_after_leaving_and_reentering() {
        let mut sentinel = ScrollSentinel::new();

        assert!(sentinel.observe(true));
        assert!(!sentinel.observe(false));
        assert!(!sentinel.is_visible());
        assert!(sentinel.observe(true));
    }

    #[test]
    fn test_reset_rearms_a_visible_marker() {
        let mut sentinel = ScrollSentinel::new();

        assert!(sentinel.observe(true));
        assert!(sentinel.take_signal());

        sentinel.reset();
        assert!(sentinel.observe(true));
        assert!(sentinel.take_signal());
    }
}
