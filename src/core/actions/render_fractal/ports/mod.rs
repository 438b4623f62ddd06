pub mod colour_map;
pub mod frame_sink;
