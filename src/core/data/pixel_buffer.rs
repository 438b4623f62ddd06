use crate::core::actions::render_fractal::ports::frame_sink::FrameSink;
use crate::core::data::colour::Rgb;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use log::warn;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, surface: SurfaceSize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, surface } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} surface",
                    pixel.x,
                    pixel.y,
                    surface.width(),
                    surface.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOverlay {
    pub position: Point,
    pub text: String,
}

pub type PixelBufferData = Vec<u8>;

/// In-memory RGB frame plus the text written over it.
#[derive(Debug)]
pub struct PixelBuffer {
    surface: SurfaceSize,
    buffer: PixelBufferData,
    texts: Vec<TextOverlay>,
    presented_frames: u64,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            buffer: vec![0; surface.pixel_count() * BYTES_PER_PIXEL],
            texts: Vec::new(),
            presented_frames: 0,
        }
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn texts(&self) -> &[TextOverlay] {
        &self.texts
    }

    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    pub fn pixel(&self, pixel: Point) -> Result<[u8; 3], PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Rgb) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;
        let [r, g, b] = colour.to_rgb8();

        self.buffer[index] = r;
        self.buffer[index + 1] = g;
        self.buffer[index + 2] = b;

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.surface.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                surface: self.surface,
            });
        }

        let row_start = pixel.y as usize * self.surface.width() as usize;

        Ok((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}

impl FrameSink for PixelBuffer {
    fn clear(&mut self) {
        self.buffer.fill(0);
        self.texts.clear();
    }

    fn put_pixel(&mut self, pixel: Point, colour: Rgb) {
        if let Err(err) = self.set_pixel(pixel, colour) {
            warn!("dropping pixel write: {err}");
        }
    }

    fn put_text(&mut self, position: Point, text: &str) {
        self.texts.push(TextOverlay {
            position,
            text: text.to_owned(),
        });
    }

    fn present(&mut self) {
        self.presented_frames += 1;
    }
}
