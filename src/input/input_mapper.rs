//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to application actions and mouse buttons to pointer
//! events for the simulation. The mapper is stateless.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::simulation::PointerEvent;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for handled keys, `None` otherwise
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }

    /// Map a mouse button transition to a pointer event
    ///
    /// Every button behaves the same; only the press matters to the
    /// simulation, but releases are still surfaced.
    pub fn map_mouse_button(_button: MouseButton, state: ElementState) -> PointerEvent {
        match state {
            ElementState::Pressed => PointerEvent::Pressed,
            ElementState::Released => PointerEvent::Released,
        }
    }
}
