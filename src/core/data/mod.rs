pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod surface_size;
pub mod viewport;
