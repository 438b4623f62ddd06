use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub action: ButtonAction,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// Leaves the guide page.
    Enter,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Key(KeyCode),
}

impl InputEvent {
    #[must_use]
    pub fn mouse_down(button: MouseButton, x: u32, y: u32) -> Self {
        Self::Mouse(MouseEvent {
            button,
            action: ButtonAction::Down,
            position: Point { x, y },
        })
    }
}
