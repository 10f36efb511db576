//! Mineral crystals: idle animation, nearest-in-range selection, pickup.

use engine_core::{Transform, Vec3};
use hecs::{Entity, World};
use procgen::CollectableSpawn;

use crate::economy::{self, Reward};
use crate::notify::NotificationSink;
use crate::resources::ResourceState;

/// Crystals closer than this can be picked up.
pub const PICKUP_RANGE: f32 = 8.0;
const BOB_AMPLITUDE: f32 = 0.5;

const GLOW_IDLE: f32 = 0.1;
const GLOW_SELECTED_BASE: f32 = 0.3;
const GLOW_SELECTED_PULSE: f32 = 0.1;
const GLOW_PULSE_RATE: f64 = 0.005;

/// A mineral crystal. Consumed crystals stay in the world with `alive == false`
/// and no transform or glow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collectable {
    /// Minerals awarded on pickup (1–5).
    pub value: u32,
    /// Yaw added per tick.
    pub rotation_speed: f32,
    /// Bob frequency factor on the wall clock.
    pub bob_speed: f32,
    /// Baseline for the vertical bob.
    pub original_y: f32,
    pub alive: bool,
}

/// Glow shell opacity, read by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub opacity: f32,
}

/// Place a crystal in the world.
pub fn spawn_collectable(world: &mut World, spawn: &CollectableSpawn) -> Entity {
    world.spawn((
        Transform::from_position(spawn.position),
        Collectable {
            value: spawn.value,
            rotation_speed: spawn.rotation_speed,
            bob_speed: spawn.bob_speed,
            original_y: spawn.position.y,
            alive: true,
        },
        Glow { opacity: GLOW_IDLE },
    ))
}

/// Vertical bob offset. Phase comes from the wall clock, so it keeps moving at dt == 0.
fn bob_offset(now_ms: u64, bob_speed: f32) -> f32 {
    ((now_ms as f64 * bob_speed as f64 * 0.001).sin() as f32) * BOB_AMPLITUDE
}

fn selected_glow(now_ms: u64) -> f32 {
    GLOW_SELECTED_BASE + ((now_ms as f64 * GLOW_PULSE_RATE).sin() as f32) * GLOW_SELECTED_PULSE
}

/// Proximity stage: animate crystals and pick the nearest one in range.
///
/// Reads the vehicle position and wall clock; writes crystal transforms and
/// glow. Ties keep the first crystal found.
pub fn update(world: &mut World, vehicle_position: Vec3, now_ms: u64) -> Option<Entity> {
    let mut nearest: Option<(Entity, f32)> = None;

    for (entity, (transform, item)) in world.query_mut::<(&mut Transform, &Collectable)>() {
        if !item.alive {
            continue;
        }
        transform.rotate_y(item.rotation_speed);
        transform.position.y = item.original_y + bob_offset(now_ms, item.bob_speed);

        let distance = vehicle_position.distance(transform.position);
        let closer = nearest.map_or(true, |(_, best)| distance < best);
        if distance < PICKUP_RANGE && closer {
            nearest = Some((entity, distance));
        }
    }

    let selected = nearest.map(|(entity, _)| entity);
    let pulse = selected_glow(now_ms);
    for (entity, glow) in world.query_mut::<&mut Glow>() {
        glow.opacity = if Some(entity) == selected {
            pulse
        } else {
            GLOW_IDLE
        };
    }

    selected
}

/// Interact: collect the selected crystal, if any, and clear the selection.
pub fn interact(
    world: &mut World,
    near: &mut Option<Entity>,
    resources: &mut ResourceState,
    sink: &mut dyn NotificationSink,
) -> Option<Reward> {
    let entity = near.take()?;
    economy::collect(world, entity, resources, sink)
}

/// Crystals not yet picked up.
pub fn remaining(world: &World) -> usize {
    world
        .query::<&Collectable>()
        .iter()
        .filter(|(_, c)| c.alive)
        .count()
}
