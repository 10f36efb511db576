//! Ambient fish: stay near home, shy away from the submarine, wander a little.

use engine_core::{Transform, Velocity, Vec3};
use hecs::{Entity, World};
use procgen::FishSpawn;
use rand::Rng;

/// Pull back toward home once outside the swim radius.
const HOMING_STRENGTH: f32 = 0.01;
/// Fish react to the submarine inside this radius.
pub const AVOID_RADIUS: f32 = 15.0;
const AVOID_STRENGTH: f32 = 0.05;
/// Half-extent of the per-tick random nudge on each axis (vertical is calmer).
const JITTER: Vec3 = Vec3::new(0.0025, 0.0015, 0.0025);
/// Velocity retained each tick after moving.
const DAMPING: f32 = 0.98;
const FACING_MIN_SPEED: f32 = 0.001;

/// Steering state of one fish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishAgent {
    /// Fixed at spawn.
    pub home_center: Vec3,
    pub swim_radius: f32,
}

pub fn spawn_fish(world: &mut World, spawn: &FishSpawn) -> Entity {
    world.spawn((
        Transform::from_position(spawn.position),
        Velocity::new(spawn.velocity),
        FishAgent {
            home_center: spawn.position,
            swim_radius: spawn.swim_radius,
        },
    ))
}

/// Sum of homing and avoidance forces for one fish (no jitter).
pub fn steering(position: Vec3, agent: &FishAgent, vehicle_position: Option<Vec3>) -> Vec3 {
    let mut force = Vec3::ZERO;

    let to_home = agent.home_center - position;
    if to_home.length() > agent.swim_radius {
        force += to_home.normalize_or_zero() * HOMING_STRENGTH;
    }

    if let Some(sub) = vehicle_position {
        let away = position - sub;
        if away.length() < AVOID_RADIUS {
            force += away.normalize_or_zero() * AVOID_STRENGTH;
        }
    }

    force
}

/// Marine life stage.
///
/// Reads the vehicle position; writes fish transforms and velocities. Velocity
/// is damped after the position update, so damping shows up next tick.
pub fn update<R: Rng + ?Sized>(world: &mut World, vehicle_position: Option<Vec3>, rng: &mut R) {
    for (_, (transform, velocity, agent)) in
        world.query_mut::<(&mut Transform, &mut Velocity, &FishAgent)>()
    {
        let jitter = Vec3::new(
            rng.gen_range(-JITTER.x..=JITTER.x),
            rng.gen_range(-JITTER.y..=JITTER.y),
            rng.gen_range(-JITTER.z..=JITTER.z),
        );
        velocity.linear += steering(transform.position, agent, vehicle_position) + jitter;

        transform.position += velocity.linear;
        if velocity.linear.length() > FACING_MIN_SPEED {
            transform.face_direction(velocity.linear);
        }

        velocity.linear *= DAMPING;
    }
}
