use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::Viewport;

/// Maps a pixel of a `pixel_width × pixel_height` surface onto the viewport.
///
/// Pixel `(0, 0)` lands on `(left, top)`; each pixel step advances by
/// `width / pixel_width` and `height / pixel_height`.
///
/// # Panics
/// Panics if either surface dimension is zero.
#[must_use]
pub fn pixel_to_complex_coords(
    viewport: &Viewport,
    pixel_x: u32,
    pixel_y: u32,
    pixel_width: u32,
    pixel_height: u32,
) -> Complex {
    assert!(
        pixel_width > 0 && pixel_height > 0,
        "surface must be non-empty to map pixels: {}x{}",
        pixel_width,
        pixel_height
    );

    let real = f64::from(pixel_x) * (viewport.width() / f64::from(pixel_width)) + viewport.left();
    let imag = f64::from(pixel_y) * (viewport.height() / f64::from(pixel_height)) + viewport.top();

    Complex { real, imag }
}

#[must_use]
pub fn pixel_to_complex_in(viewport: &Viewport, pixel: Point, surface: SurfaceSize) -> Complex {
    pixel_to_complex_coords(
        viewport,
        pixel.x,
        pixel.y,
        surface.width(),
        surface.height(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_complex_top_left() {
        let result = pixel_to_complex_coords(&Viewport::default(), 0, 0, 800, 600);

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let result = pixel_to_complex_coords(&Viewport::default(), 400, 300, 800, 600);

        assert!((result.real - -0.5).abs() < 1e-12);
        assert!(result.imag.abs() < 1e-12);
    }

    #[test]
    fn test_pixel_to_complex_last_pixel_stops_short_of_edge() {
        let viewport = Viewport::new(0.0, 0.0, 4.0, 2.0).unwrap();

        let result = pixel_to_complex_coords(&viewport, 3, 1, 4, 2);

        assert_eq!(result, Complex::new(3.0, 1.0));
    }

    #[test]
    fn test_pixel_to_complex_is_monotonic() {
        let viewport = Viewport::new(-0.7435, 0.1314, 1e-6, 7.5e-7).unwrap();
        let (width, height) = (64, 48);

        for y in 0..height {
            for x in 1..width {
                let previous = pixel_to_complex_coords(&viewport, x - 1, y, width, height);
                let current = pixel_to_complex_coords(&viewport, x, y, width, height);
                assert!(current.real > previous.real);
                assert_eq!(current.imag, previous.imag);
            }
        }

        for x in 0..width {
            for y in 1..height {
                let previous = pixel_to_complex_coords(&viewport, x, y - 1, width, height);
                let current = pixel_to_complex_coords(&viewport, x, y, width, height);
                assert!(current.imag > previous.imag);
                assert_eq!(current.real, previous.real);
            }
        }
    }

    #[test]
    fn test_pixel_to_complex_in_matches_coords() {
        let viewport = Viewport::default();
        let surface = SurfaceSize::new(80, 60).unwrap();

        assert_eq!(
            pixel_to_complex_in(&viewport, Point { x: 13, y: 7 }, surface),
            pixel_to_complex_coords(&viewport, 13, 7, 80, 60)
        );
    }

    #[test]
    #[should_panic(expected = "surface must be non-empty")]
    fn test_zero_sized_surface_panics() {
        let _ = pixel_to_complex_coords(&Viewport::default(), 0, 0, 0, 600);
    }
}
