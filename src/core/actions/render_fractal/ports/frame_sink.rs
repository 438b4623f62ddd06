use crate::core::data::colour::Rgb;
use crate::core::data::point::Point;

/// Output surface a render pass writes into.
///
/// A pass calls `clear`, then writes pixels and text, and finally calls
/// `present` once the frame is complete.
pub trait FrameSink {
    fn clear(&mut self);
    fn put_pixel(&mut self, pixel: Point, colour: Rgb);
    fn put_text(&mut self, position: Point, text: &str);
    fn present(&mut self);
}
