use crate::controllers::interactive::ports::scheduler::TickScheduler;
use std::time::{Duration, Instant};

/// Records tick deadlines and redraw requests for the winit loop to act on
/// in `AboutToWait`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WinitScheduler {
    next_tick: Option<Instant>,
    redraw_requested: bool,
}

impl WinitScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Clears and reports the pending tick if its deadline has passed.
    pub fn take_due_tick(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(deadline) if deadline <= now => {
                self.next_tick = None;
                true
            }
            _ => false,
        }
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn schedule_tick_at(&mut self, deadline: Instant) {
        self.next_tick = Some(deadline);
    }
}

impl TickScheduler for WinitScheduler {
    fn schedule_tick(&mut self, delay: Duration) {
        self.schedule_tick_at(Instant::now() + delay);
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_is_not_due_before_deadline() {
        let mut scheduler = WinitScheduler::new();
        let start = Instant::now();
        scheduler.schedule_tick_at(start + Duration::from_millis(16));

        assert!(!scheduler.take_due_tick(start));
        assert!(scheduler.take_due_tick(start + Duration::from_millis(16)));
        assert!(!scheduler.take_due_tick(start + Duration::from_secs(1)));
        assert_eq!(scheduler.next_tick(), None);
    }

    #[test]
    fn test_schedule_tick_sets_future_deadline() {
        let mut scheduler = WinitScheduler::new();
        let before = Instant::now();

        scheduler.schedule_tick(Duration::from_millis(16));

        let deadline = scheduler.next_tick().unwrap();
        assert!(deadline >= before + Duration::from_millis(16));
    }

    #[test]
    fn test_redraw_request_is_taken_once() {
        let mut scheduler = WinitScheduler::new();
        scheduler.request_redraw();

        assert!(scheduler.take_redraw());
        assert!(!scheduler.take_redraw());
    }
}
