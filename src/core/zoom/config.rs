use std::time::Duration;

pub const DEFAULT_ZOOM_DURATION: Duration = Duration::from_millis(550);
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomConfig {
    pub duration: Duration,
    pub tick_interval: Duration,
}

impl ZoomConfig {
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ZOOM_DURATION,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}
