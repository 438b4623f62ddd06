use crate::core::actions::render_fractal::ports::colour_map::ColourMap;
use crate::core::actions::render_fractal::ports::frame_sink::FrameSink;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::escape_iterations;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_in;
use log::trace;
use std::time::Instant;

/// Where the complex-number readout is drawn, in surface pixels from the top-left.
pub const READOUT_POSITION: Point = Point { x: 10, y: 20 };

/// One pixel's journey through a render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    pub pixel: Point,
    pub complex: Complex,
    pub iterations: u32,
}

#[must_use]
pub fn complex_readout(complex: Complex) -> String {
    format!("Current Complex Number: {complex}")
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FractalRenderer {
    config: MandelbrotConfig,
}

impl FractalRenderer {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        self.config
    }

    #[must_use]
    pub fn sample(&self, viewport: &Viewport, surface: SurfaceSize, pixel: Point) -> PixelSample {
        let complex = pixel_to_complex_in(viewport, pixel, surface);

        PixelSample {
            pixel,
            complex,
            iterations: escape_iterations(complex, self.config.max_iterations),
        }
    }

    /// Renders one full frame into `sink` in row-major order and returns the
    /// complex coordinate of the last pixel visited (the bottom-right one).
    ///
    /// The readout text drawn after the pixels shows that same coordinate.
    pub fn render<S: FrameSink + ?Sized>(
        &self,
        viewport: &Viewport,
        surface: SurfaceSize,
        sink: &mut S,
    ) -> Complex {
        let started = Instant::now();
        let colour_map = self.config.colour_map_for(viewport);
        let mut last_complex = Complex::ZERO;

        sink.clear();

        for y in 0..surface.height() {
            for x in 0..surface.width() {
                let sample = self.sample(viewport, surface, Point { x, y });
                last_complex = sample.complex;
                sink.put_pixel(sample.pixel, colour_map.map(sample.iterations));
            }
        }

        sink.put_text(READOUT_POSITION, &complex_readout(last_complex));
        sink.present();

        trace!(
            "rendered {}x{} pass at zoom level {:.3} in {:?}",
            surface.width(),
            surface.height(),
            colour_map.zoom_level(),
            started.elapsed()
        );

        last_complex
    }
}
