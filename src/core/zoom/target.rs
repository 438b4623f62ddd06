use crate::core::data::point::Point;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::{Viewport, ViewportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Viewport a click at `click` on `surface` zooms towards.
///
/// The click is normalised to `(mx, my)` in `[0, 1)`. Zooming in halves both
/// extents and shifts the origin by the click's offset from the centre;
/// zooming out doubles them and additionally moves the origin back by a
/// quarter of the current extent. The vertical offset is subtracted, so a
/// click below the centre lowers `top`.
///
/// Fails only when the new extent leaves the representable positive range
/// (after roughly a thousand consecutive zooms in one direction).
pub fn zoom_target(
    viewport: &Viewport,
    click: Point,
    surface: SurfaceSize,
    direction: ZoomDirection,
) -> Result<Viewport, ViewportError> {
    let mx = f64::from(click.x) / f64::from(surface.width());
    let my = f64::from(click.y) / f64::from(surface.height());

    let width = viewport.width();
    let height = viewport.height();
    let left = viewport.left() + (mx - 0.5) * width;
    let top = viewport.top() - (my - 0.5) * height;

    match direction {
        ZoomDirection::In => Viewport::new(left, top, width / 2.0, height / 2.0),
        ZoomDirection::Out => Viewport::new(
            left - width / 4.0,
            top + height / 4.0,
            width * 2.0,
            height * 2.0,
        ),
    }
}
