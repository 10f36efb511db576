//! Abstract per-frame control intent, decoupled from device events.

/// What the pilot is asking for this frame.
///
/// Conflicting pairs (left+right, forward+backward, ascend+descend) are legal;
/// the simulation resolves them by fixed priority.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
    pub ascend: bool,
    pub descend: bool,
    pub interact: bool,
    /// Horizontal touch-drag offset from screen centre in pixels, if a drag is active.
    pub touch_offset_x: Option<f32>,
}

impl ControlIntent {
    /// Any movement key held (drives cosmetic animation such as the propeller).
    pub fn any_movement(&self) -> bool {
        self.turn_left
            || self.turn_right
            || self.forward
            || self.backward
            || self.ascend
            || self.descend
    }

    pub fn forward() -> Self {
        Self {
            forward: true,
            ..Default::default()
        }
    }

    pub fn interact() -> Self {
        Self {
            interact: true,
            ..Default::default()
        }
    }
}
