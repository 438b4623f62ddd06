mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::adapters::pixel_format::{PixelFormatError, copy_frame_into_rgba};
pub use crate::controllers::interactive::{
    ButtonAction, Clock, DisplayMode, ExplorerConfig, InputEvent, InputOutcome,
    InteractiveController, KeyCode, ManualClock, ManualScheduler, MonotonicClock, MouseButton,
    MouseEvent, RendererState, TickScheduler,
};
pub use crate::core::actions::render_fractal::ports::colour_map::ColourMap;
pub use crate::core::actions::render_fractal::ports::frame_sink::FrameSink;
pub use crate::core::actions::render_fractal::renderer::{
    FractalRenderer, PixelSample, READOUT_POSITION, complex_readout,
};
pub use crate::core::actions::render_guide::{GUIDE_LINES, GUIDE_PROMPT, render_guide};
pub use crate::core::data::colour::{Hsl, Rgb, hue_to_rgb};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, TextOverlay};
pub use crate::core::data::point::Point;
pub use crate::core::data::surface_size::{SurfaceSize, SurfaceSizeError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::{DEFAULT_MAX_ITERATIONS, escape_iterations};
pub use crate::core::fractals::mandelbrot::colour_map::{
    ZoomHueColourMap, iteration_to_colour, zoom_level,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, pixel_to_complex_in,
};
pub use crate::core::zoom::{
    AnimatorState, ZoomAnimation, ZoomAnimator, ZoomConfig, ZoomDirection, ZoomRequestOutcome,
    ZoomTickOutcome, zoom_target,
};

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, run_gui, run_gui_with};
