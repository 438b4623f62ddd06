pub mod render_fractal;
pub mod render_guide;
