//! Third-person chase camera target for the renderer.

use engine_core::{Mat4, Transform, Vec3};

/// Camera offset behind and above the hull, in hull space.
const FOLLOW_OFFSET: Vec3 = Vec3::new(-15.0, 5.0, 0.0);
/// Look slightly ahead of the hull, in hull space.
const LOOK_AHEAD: Vec3 = Vec3::new(5.0, 0.0, 0.0);
/// Per-tick lerp toward the ideal position.
const FOLLOW_SMOOTHING: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub position: Vec3,
    pub target: Vec3,
}

impl FollowCamera {
    /// Start directly at the ideal spot behind the hull (no opening ease-in).
    pub fn behind(hull: &Transform) -> Self {
        Self {
            position: hull.position + hull.local_to_world(FOLLOW_OFFSET),
            target: hull.position + hull.local_to_world(LOOK_AHEAD),
        }
    }

    pub fn update(&mut self, hull: &Transform) {
        let ideal = hull.position + hull.local_to_world(FOLLOW_OFFSET);
        self.position = self.position.lerp(ideal, FOLLOW_SMOOTHING);
        self.target = hull.position + hull.local_to_world(LOOK_AHEAD);
    }

    /// Right-handed view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_behind_and_above() {
        let hull = Transform::from_position(Vec3::new(0.0, -10.0, 0.0));
        let cam = FollowCamera::behind(&hull);
        assert_eq!(cam.position, Vec3::new(-15.0, -5.0, 0.0));
        assert_eq!(cam.target, Vec3::new(5.0, -10.0, 0.0));
    }

    #[test]
    fn lags_behind_a_moving_hull() {
        let mut hull = Transform::from_position(Vec3::ZERO);
        let mut cam = FollowCamera::behind(&hull);
        hull.translate(Vec3::new(10.0, 0.0, 0.0));
        cam.update(&hull);
        assert!((cam.position.x - (-15.0 + 0.5)).abs() < 1e-5);
        assert_eq!(cam.target, Vec3::new(15.0, 0.0, 0.0));
    }

    #[test]
    fn view_matrix_maps_target_ahead() {
        let hull = Transform::from_position(Vec3::ZERO);
        let cam = FollowCamera::behind(&hull);
        let view_space = cam.view_matrix().transform_point3(cam.target);
        // Right-handed: things in front of the camera have negative z.
        assert!(view_space.z < 0.0);
    }
}
