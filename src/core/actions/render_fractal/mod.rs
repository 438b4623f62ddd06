pub mod ports;
pub mod renderer;
