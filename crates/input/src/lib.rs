//! Input handling: held keys and touch drag, folded into a [`ControlIntent`].

use glam::Vec2;
use std::collections::HashSet;

mod intent;

pub use intent::ControlIntent;

/// Touch drags closer than this to screen centre are ignored by steering.
pub const TOUCH_DEAD_ZONE_PX: f32 = 20.0;

/// Held keys and the active touch, sampled once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,

    /// Active touch position in window coordinates.
    touch_position: Option<Vec2>,
    /// Viewport width, for centring touch steering.
    viewport_width: f32,
}

impl InputState {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            viewport_width,
            ..Default::default()
        }
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process a touch move (or start). `None` ends the drag.
    pub fn process_touch(&mut self, position: Option<Vec2>) {
        self.touch_position = position;
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    fn any_held(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|k| self.keys_held.contains(k))
    }

    /// Horizontal drag offset from screen centre, if a touch is active.
    pub fn touch_offset_x(&self) -> Option<f32> {
        self.touch_position
            .map(|p| p.x - self.viewport_width * 0.5)
    }

    /// Fold the held keys into this frame's control intent.
    ///
    /// Interact is a held key like the others; the simulation decides
    /// whether there is anything to interact with.
    pub fn control_intent(&self) -> ControlIntent {
        ControlIntent {
            turn_left: self.any_held(&[KeyCode::KeyA, KeyCode::ArrowLeft]),
            turn_right: self.any_held(&[KeyCode::KeyD, KeyCode::ArrowRight]),
            forward: self.any_held(&[KeyCode::KeyW, KeyCode::ArrowUp]),
            backward: self.any_held(&[KeyCode::KeyS, KeyCode::ArrowDown]),
            ascend: self.is_key_held(KeyCode::Space),
            descend: self.any_held(&[KeyCode::ShiftLeft, KeyCode::ShiftRight]),
            interact: self.is_key_held(KeyCode::KeyE),
            touch_offset_x: self.touch_offset_x(),
        }
    }
}

// Re-export for convenience
pub use winit::event::ElementState;
pub use winit::keyboard::KeyCode;
