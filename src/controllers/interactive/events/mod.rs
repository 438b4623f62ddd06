pub mod input;

pub use input::{ButtonAction, InputEvent, KeyCode, MouseButton, MouseEvent};
