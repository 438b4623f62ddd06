use std::time::Duration;

/// Host services the animation needs from the event loop.
pub trait TickScheduler {
    /// Asks for `InteractiveController::tick` to be called after `delay`.
    fn schedule_tick(&mut self, delay: Duration);

    /// Asks for a redraw of the surface at the host's next opportunity.
    fn request_redraw(&mut self);
}

/// Scheduler that just records requests; the owner polls and clears them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManualScheduler {
    pending_tick: Option<Duration>,
    redraw_requested: bool,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_tick(&mut self) -> Option<Duration> {
        self.pending_tick.take()
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[must_use]
    pub fn has_pending_tick(&self) -> bool {
        self.pending_tick.is_some()
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule_tick(&mut self, delay: Duration) {
        self.pending_tick = Some(delay);
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}
