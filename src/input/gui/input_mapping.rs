//! Translation from winit events to controller input.

use crate::controllers::interactive::events::{
    ButtonAction, InputEvent, KeyCode, MouseButton, MouseEvent,
};
use crate::core::data::point::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

#[must_use]
pub fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

#[must_use]
pub fn map_button_action(state: ElementState) -> ButtonAction {
    match state {
        ElementState::Pressed => ButtonAction::Down,
        ElementState::Released => ButtonAction::Up,
    }
}

#[must_use]
pub fn map_key(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(WinitKeyCode::Enter | WinitKeyCode::NumpadEnter) => KeyCode::Enter,
        _ => KeyCode::Other,
    }
}

/// Key presses become input; releases are dropped.
#[must_use]
pub fn key_input(key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    match state {
        ElementState::Pressed => Some(InputEvent::Key(map_key(key))),
        ElementState::Released => None,
    }
}

/// winit reports clicks without a position, so the last cursor position is kept here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CursorTracker {
    position: Point,
}

impl CursorTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cursor position in physical pixels, truncated to the pixel
    /// it falls in. Positions left of or above the window clamp to zero.
    pub fn moved(&mut self, position: PhysicalPosition<f64>) {
        self.position = Point {
            x: to_pixel(position.x),
            y: to_pixel(position.y),
        };
    }

    #[must_use]
    pub fn mouse_input(&self, button: WinitMouseButton, state: ElementState) -> InputEvent {
        InputEvent::Mouse(MouseEvent {
            button: map_mouse_button(button),
            action: map_button_action(state),
            position: self.position,
        })
    }
}

fn to_pixel(coordinate: f64) -> u32 {
    // `as` saturates and maps NaN to zero.
    coordinate.max(0.0).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right_buttons_map_to_zoom_buttons() {
        let cases = [
            (WinitMouseButton::Left, MouseButton::Left),
            (WinitMouseButton::Right, MouseButton::Right),
            (WinitMouseButton::Middle, MouseButton::Other),
            (WinitMouseButton::Other(7), MouseButton::Other),
        ];

        for (button, expected) in cases {
            assert_eq!(map_mouse_button(button), expected);
        }
    }

    #[test]
    fn test_both_enter_keys_map_to_enter() {
        let cases = [
            (WinitKeyCode::Enter, KeyCode::Enter),
            (WinitKeyCode::NumpadEnter, KeyCode::Enter),
            (WinitKeyCode::Space, KeyCode::Other),
        ];

        for (code, expected) in cases {
            assert_eq!(map_key(PhysicalKey::Code(code)), expected);
        }
    }

    #[test]
    fn test_key_release_is_dropped() {
        let enter = PhysicalKey::Code(WinitKeyCode::Enter);

        assert_eq!(
            key_input(enter, ElementState::Pressed),
            Some(InputEvent::Key(KeyCode::Enter))
        );
        assert_eq!(key_input(enter, ElementState::Released), None);
    }

    #[test]
    fn test_cursor_tracker_attaches_last_position_to_clicks() {
        let mut cursor = CursorTracker::new();
        cursor.moved(PhysicalPosition::new(400.7, 299.2));

        assert_eq!(
            cursor.mouse_input(WinitMouseButton::Left, ElementState::Pressed),
            InputEvent::mouse_down(MouseButton::Left, 400, 299)
        );
    }

    #[test]
    fn test_cursor_tracker_clamps_outside_positions() {
        let mut cursor = CursorTracker::new();

        cursor.moved(PhysicalPosition::new(-12.0, f64::NAN));

        assert_eq!(
            cursor.mouse_input(WinitMouseButton::Right, ElementState::Released),
            InputEvent::Mouse(MouseEvent {
                button: MouseButton::Right,
                action: ButtonAction::Up,
                position: Point { x: 0, y: 0 },
            })
        );
    }
}
