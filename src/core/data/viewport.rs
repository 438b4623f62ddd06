use std::error::Error;
use std::fmt;

pub const DEFAULT_LEFT: f64 = -2.0;
pub const DEFAULT_TOP: f64 = -1.0;
pub const DEFAULT_WIDTH: f64 = 3.0;
pub const DEFAULT_HEIGHT: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "viewport size must be positive and finite: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangle of the complex plane shown on the surface.
///
/// Covers `[left, left + width] × [top, top + height]`, where `top` is the
/// imaginary coordinate of pixel row 0.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, ViewportError> {
        if !is_valid_extent(width) || !is_valid_extent(height) {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Moves every field a `progress` fraction of the way towards `target`.
    ///
    /// The base is the current (already moved) value, so repeated calls
    /// approach the target along an ease-out curve. `progress` is clamped to
    /// `[0, 1]`, which keeps width and height on the segment between two
    /// positive values.
    pub fn approach(&mut self, target: &Viewport, progress: f64) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        self.left += (target.left - self.left) * progress;
        self.top += (target.top - self.top) * progress;
        self.width += (target.width - self.width) * progress;
        self.height += (target.height - self.height) * progress;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT,
            top: DEFAULT_TOP,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

fn is_valid_extent(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}
