//! Transform component and utilities for spatial positioning.

use glam::{Quat, Vec3};

/// A 3D transform representing position and rotation.
///
/// Vehicles and fish are modelled nose-first along local +X for the hull and
/// +Z for fish (the latter is what `face_direction` aligns).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Rotate a local-frame vector into world space.
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Get the hull's forward direction (positive X).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate around the world Y axis (yaw), pre-composed onto the current rotation.
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle) * self.rotation;
    }

    /// Rotate around the local Y axis, post-composed onto the current rotation.
    pub fn rotate_local_y(&mut self, angle: f32) {
        self.rotation = self.rotation * Quat::from_rotation_y(angle);
    }

    /// Turn so local +Z points along `direction`. Zero-length directions are ignored.
    pub fn face_direction(&mut self, direction: Vec3) {
        let dir = direction.normalize_or_zero();
        if dir.length_squared() > 0.0 {
            self.rotation = Quat::from_rotation_arc(Vec3::Z, dir);
        }
    }
}
