//! Port definitions for the interactive controller.
//!
//! The controller reads time through [`Clock`] and asks the host event loop
//! for ticks and redraws through [`TickScheduler`]. Frames are written to a
//! [`FrameSink`](crate::core::actions::render_fractal::ports::frame_sink::FrameSink).

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use scheduler::{ManualScheduler, TickScheduler};
