pub mod display_mode;
pub mod explorer_config;
pub mod renderer_state;
