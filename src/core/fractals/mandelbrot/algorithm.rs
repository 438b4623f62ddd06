use crate::core::data::complex::Complex;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// `|z|²` at or above which the orbit is considered escaped (radius 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z ← z² + c` from `z = 0` until `|z|² ≥ 4` or the
/// cap is reached. The result lies in `[0, max_iterations]`.
#[must_use]
pub fn escape_iterations(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut count = 0;

    while count < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z * z + c;
        count += 1;
    }

    count
}
