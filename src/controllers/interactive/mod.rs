//! Interactive controller for exploring the Mandelbrot set.
//!
//! The controller owns the viewport, the zoom animator and the display mode.
//! It is driven entirely by its host:
//! - **Input**: [`InputEvent`]s translated from the windowing system
//! - **Time**: the [`Clock`] port, read once per request or tick
//! - **Wake-ups**: the [`TickScheduler`] port, asked for ticks and redraws
//! - **Output**: any [`FrameSink`](crate::FrameSink)

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::{InputOutcome, InteractiveController};
pub use data::display_mode::DisplayMode;
pub use data::explorer_config::ExplorerConfig;
pub use data::renderer_state::RendererState;
pub use events::{ButtonAction, InputEvent, KeyCode, MouseButton, MouseEvent};
pub use ports::{Clock, ManualClock, ManualScheduler, MonotonicClock, TickScheduler};
