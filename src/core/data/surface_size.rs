use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SurfaceSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for SurfaceSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "surface size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for SurfaceSizeError {}

/// Pixel dimensions of the output surface. Both sides are at least one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceSizeError> {
        if width == 0 || height == 0 {
            return Err(SurfaceSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let surface = SurfaceSize::new(800, 600).unwrap();

        assert_eq!(surface.width(), 800);
        assert_eq!(surface.height(), 600);
        assert_eq!(surface.pixel_count(), 480_000);
    }

    #[test]
    fn test_zero_sized_surface_is_rejected() {
        assert_eq!(
            SurfaceSize::new(0, 600),
            Err(SurfaceSizeError::InvalidSize {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            SurfaceSize::new(800, 0),
            Err(SurfaceSizeError::InvalidSize {
                width: 800,
                height: 0
            })
        );
    }

    #[test]
    fn test_contains_point() {
        let surface = SurfaceSize::new(4, 3).unwrap();

        assert!(surface.contains_point(Point { x: 0, y: 0 }));
        assert!(surface.contains_point(Point { x: 3, y: 2 }));
        assert!(!surface.contains_point(Point { x: 4, y: 0 }));
        assert!(!surface.contains_point(Point { x: 0, y: 3 }));
    }
}
