//! Common ECS components used across the engine.

use glam::Vec3;

/// Velocity component for moving entities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub linear: Vec3,
    pub angular: Vec3,
}

impl Velocity {
    pub fn new(linear: Vec3) -> Self {
        Self {
            linear,
            angular: Vec3::ZERO,
        }
    }

    pub fn with_angular(linear: Vec3, angular: Vec3) -> Self {
        Self { linear, angular }
    }

    /// True when both linear and angular parts are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.linear.length_squared() == 0.0 && self.angular.length_squared() == 0.0
    }
}

/// Lifetime component for temporary things (on-screen notices, effects).
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    pub remaining: f32,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(ms as f32 / 1000.0)
    }

    /// Count down; returns true once expired.
    pub fn update(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_zero_checks_both_parts() {
        assert!(Velocity::default().is_zero());
        assert!(!Velocity::new(Vec3::X).is_zero());
        assert!(!Velocity::with_angular(Vec3::ZERO, Vec3::Y).is_zero());
    }

    #[test]
    fn lifetime_expires() {
        let mut l = Lifetime::from_millis(2000);
        assert!(!l.update(1.5));
        assert!(l.update(0.5));
        assert!(l.remaining <= 0.0);
    }
}
