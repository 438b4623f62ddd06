use crate::core::data::viewport::{DEFAULT_WIDTH, Viewport};
use crate::core::fractals::mandelbrot::algorithm::DEFAULT_MAX_ITERATIONS;
use crate::core::fractals::mandelbrot::colour_map::ZoomHueColourMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    /// Width the zoom level is measured against.
    pub initial_width: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initial_width: DEFAULT_WIDTH,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn colour_map_for(&self, viewport: &Viewport) -> ZoomHueColourMap {
        ZoomHueColourMap::for_viewport(self.max_iterations, viewport, self.initial_width)
    }
}
