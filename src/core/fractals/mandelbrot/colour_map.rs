use crate::core::actions::render_fractal::ports::colour_map::ColourMap;
use crate::core::data::colour::{Hsl, Rgb};
use crate::core::data::viewport::Viewport;

/// Iteration counts repeat their hue and lightness with this period.
pub const HUE_PERIOD: u32 = 255;

const SATURATION: f64 = 1.0;
const BASE_LIGHTNESS: f64 = 0.5;
const ZOOM_HUE_DIVISOR: f64 = 10.0;

/// `log2(width / initial_width)`: negative when zoomed in, positive when zoomed out.
#[must_use]
pub fn zoom_level(viewport: &Viewport, initial_width: f64) -> f64 {
    (viewport.width() / initial_width).log2()
}

/// Colours an iteration count, rotating the hue by a tenth of a turn per
/// doubling of the view width. `_max_iterations` is part of the signature
/// only; interior points are not special-cased.
#[must_use]
pub fn iteration_to_colour(count: u32, _max_iterations: u32, zoom_level: f64) -> Rgb {
    let banded = f64::from(count % HUE_PERIOD);

    Hsl {
        hue: banded / f64::from(HUE_PERIOD) + zoom_level / ZOOM_HUE_DIVISOR,
        saturation: SATURATION,
        lightness: BASE_LIGHTNESS + banded / f64::from(2 * HUE_PERIOD),
    }
    .to_rgb()
}

/// Colour map for one render pass; the zoom level is fixed for the pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomHueColourMap {
    max_iterations: u32,
    zoom_level: f64,
}

impl ZoomHueColourMap {
    #[must_use]
    pub fn new(max_iterations: u32, zoom_level: f64) -> Self {
        Self {
            max_iterations,
            zoom_level,
        }
    }

    #[must_use]
    pub fn for_viewport(max_iterations: u32, viewport: &Viewport, initial_width: f64) -> Self {
        Self::new(max_iterations, zoom_level(viewport, initial_width))
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.zoom_level
    }
}

impl ColourMap for ZoomHueColourMap {
    fn map(&self, iterations: u32) -> Rgb {
        iteration_to_colour(iterations, self.max_iterations, self.zoom_level)
    }
}
