//! Windowed front end: winit events in, pixels frames out.

mod app;
pub mod errors;
pub mod input_mapping;
pub mod scheduler;

pub use app::{run_gui, run_gui_with};
pub use errors::GuiError;
