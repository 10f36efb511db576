//! Submarine motion: intent to target velocity, low-pass smoothing, pose integration.
//!
//! Smoothing factors are applied once per tick rather than scaled by `dt`, so
//! handling feel depends on the host frame rate. This matches the tuning the
//! constants were chosen against.

use engine_core::{Transform, Velocity, Vec3};
use input::{ControlIntent, TOUCH_DEAD_ZONE_PX};

use crate::resources::ResourceState;

/// Target yaw rate while a turn key is held (rad/s).
pub const TURN_RATE: f32 = 1.5;
/// Target surge speed (units/s).
pub const MOVE_SPEED: f32 = 5.0;
/// Vertical speed as a fraction of surge speed.
pub const VERTICAL_SPEED_FACTOR: f32 = 0.7;

/// Per-tick lerp factor toward target linear velocity.
pub const LINEAR_SMOOTHING: f32 = 0.1;
/// Per-tick lerp factor toward target angular velocity.
pub const ANGULAR_SMOOTHING: f32 = 0.15;

const YAW_EPSILON: f32 = 0.001;
const SPEED_SQ_EPSILON: f32 = 0.0001;

/// Above this world Y the hull counts as surfaced.
pub const SURFACE_LEVEL_Y: f32 = -10.0;

/// Radians of local yaw per pixel of touch drag.
const TOUCH_STEER_GAIN: f32 = 0.0001;
/// Propeller advance per tick while a movement key is held.
const PROPELLER_SPIN: f32 = 0.5;

/// The player's submarine. Velocities are in the hull's local frame (+X forward).
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub transform: Transform,
    /// Smoothed current velocity.
    pub velocity: Velocity,
    /// Target velocity, rebuilt from intent every tick.
    pub target: Velocity,
    /// Cosmetic propeller angle.
    pub propeller_angle: f32,
}

impl Vehicle {
    pub fn new(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            velocity: Velocity::default(),
            target: Velocity::default(),
            propeller_angle: 0.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

/// Map intent to target velocity. With no power, every target is zero.
///
/// Conflicting keys resolve by priority: left over right, forward over
/// backward, ascend over descend.
pub fn target_from_intent(intent: &ControlIntent, power: f32) -> Velocity {
    let mut target = Velocity::default();
    if power <= 0.0 {
        return target;
    }

    if intent.turn_left {
        target.angular.y = TURN_RATE;
    } else if intent.turn_right {
        target.angular.y = -TURN_RATE;
    }

    if intent.forward {
        target.linear.x = MOVE_SPEED;
    } else if intent.backward {
        target.linear.x = -MOVE_SPEED;
    }

    if intent.ascend {
        target.linear.y = MOVE_SPEED * VERTICAL_SPEED_FACTOR;
    } else if intent.descend {
        target.linear.y = -MOVE_SPEED * VERTICAL_SPEED_FACTOR;
    }

    target
}

/// Motion stage.
///
/// Reads intent, `dt` and `resources.power`; writes the vehicle pose and
/// velocities, then `resources.depth` and `resources.is_at_surface`.
pub fn step(vehicle: &mut Vehicle, resources: &mut ResourceState, intent: &ControlIntent, dt: f32) {
    vehicle.target = target_from_intent(intent, resources.power);

    vehicle.velocity.linear = vehicle.velocity.linear.lerp(vehicle.target.linear, LINEAR_SMOOTHING);
    vehicle.velocity.angular = vehicle
        .velocity
        .angular
        .lerp(vehicle.target.angular, ANGULAR_SMOOTHING);

    // Yaw about the world vertical, not the hull's own up axis.
    let yaw_rate = vehicle.velocity.angular.y;
    if yaw_rate.abs() > YAW_EPSILON {
        vehicle.transform.rotate_y(yaw_rate * dt);
    }

    if vehicle.velocity.linear.length_squared() > SPEED_SQ_EPSILON {
        let world_velocity = vehicle.transform.local_to_world(vehicle.velocity.linear);
        vehicle.transform.translate(world_velocity * dt);
    }

    // Touch drag steers directly, with or without power.
    if let Some(offset) = intent.touch_offset_x {
        if offset.abs() > TOUCH_DEAD_ZONE_PX {
            vehicle.transform.rotate_local_y(-offset * TOUCH_STEER_GAIN);
        }
    }

    if intent.any_movement() {
        vehicle.propeller_angle += PROPELLER_SPIN;
    }

    let y = vehicle.transform.position.y;
    resources.depth = (-y).max(0.0);
    resources.is_at_surface = y > SURFACE_LEVEL_Y;
}
