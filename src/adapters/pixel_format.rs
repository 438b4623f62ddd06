//! Pixel format conversion for presentation adapters.

use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "RGBA destination holds {} bytes, frame needs {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Expands a frame's RGB bytes into an RGBA destination with opaque alpha.
///
/// `dst` must be exactly four bytes per pixel of the frame's surface.
pub fn copy_frame_into_rgba(frame: &PixelBuffer, dst: &mut [u8]) -> Result<(), PixelFormatError> {
    let expected = frame.surface().pixel_count() * 4;

    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in frame.buffer().chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}
