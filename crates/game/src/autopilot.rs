//! Scripted pilot for headless sessions: hunts crystals, surfaces for air,
//! idles to recharge. Drives the sim through the same key bindings a player uses.

use glam::Vec3;
use input::{ElementState, InputState, KeyCode};
use sim::proximity::Collectable;
use sim::Simulation;

/// Keys the autopilot presses and releases.
const MANAGED_KEYS: [KeyCode; 6] = [
    KeyCode::KeyW,
    KeyCode::KeyA,
    KeyCode::KeyD,
    KeyCode::Space,
    KeyCode::ShiftLeft,
    KeyCode::KeyE,
];

const SURFACE_BELOW_OXYGEN: f32 = 35.0;
const RESUME_ABOVE_OXYGEN: f32 = 99.0;
const RECHARGE_BELOW_POWER: f32 = 3.0;
const RESUME_ABOVE_POWER: f32 = 40.0;
/// Heading error (sine) tolerated before turning.
const HEADING_TOLERANCE: f32 = 0.05;
/// Only thrust forward when roughly facing the target.
const THRUST_ALIGNMENT: f32 = 0.8;
const DEPTH_TOLERANCE: f32 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotMode {
    Hunting,
    Surfacing,
    Recharging,
}

pub struct Autopilot {
    pub mode: PilotMode,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            mode: PilotMode::Hunting,
        }
    }

    /// Update mode from the post-tick state and press/release keys to match.
    pub fn drive(&mut self, sim: &Simulation, input: &mut InputState) {
        let wanted = self.plan(sim);
        for key in MANAGED_KEYS {
            let want = wanted.contains(&key);
            if want && !input.is_key_held(key) {
                input.process_keyboard(key, ElementState::Pressed);
            } else if !want && input.is_key_held(key) {
                input.process_keyboard(key, ElementState::Released);
            }
        }
    }

    /// Buy hull levels whenever the wallet allows.
    pub fn wants_upgrade(&self, sim: &Simulation) -> bool {
        sim.upgrades.can_afford_hull(&sim.resources)
    }

    /// Keys to hold this frame.
    pub fn plan(&mut self, sim: &Simulation) -> Vec<KeyCode> {
        let Some(vehicle) = sim.vehicle.as_ref() else {
            return Vec::new();
        };
        let r = &sim.resources;

        let next_mode = match self.mode {
            _ if r.oxygen < SURFACE_BELOW_OXYGEN => PilotMode::Surfacing,
            PilotMode::Surfacing if r.is_at_surface && r.oxygen >= RESUME_ABOVE_OXYGEN => {
                PilotMode::Hunting
            }
            PilotMode::Hunting if r.power < RECHARGE_BELOW_POWER => PilotMode::Recharging,
            PilotMode::Recharging if r.power >= RESUME_ABOVE_POWER => PilotMode::Hunting,
            mode => mode,
        };
        if next_mode != self.mode {
            log::info!("Autopilot: {:?} -> {:?}", self.mode, next_mode);
            self.mode = next_mode;
        }

        match self.mode {
            PilotMode::Surfacing if r.is_at_surface => Vec::new(),
            PilotMode::Surfacing => vec![KeyCode::Space],
            PilotMode::Recharging => Vec::new(),
            PilotMode::Hunting => {
                if sim.near_collectable().is_some() {
                    return vec![KeyCode::KeyE];
                }
                match nearest_crystal(sim, vehicle.position()) {
                    Some(target) => steer_toward(vehicle.position(), vehicle.transform.forward(), target),
                    None => Vec::new(),
                }
            }
        }
    }
}

fn nearest_crystal(sim: &Simulation, from: Vec3) -> Option<Vec3> {
    sim.world
        .query::<(&engine_core::Transform, &Collectable)>()
        .iter()
        .filter(|(_, (_, c))| c.alive)
        .map(|(_, (t, _))| t.position)
        .min_by(|a, b| from.distance_squared(*a).total_cmp(&from.distance_squared(*b)))
}

fn steer_toward(position: Vec3, forward: Vec3, target: Vec3) -> Vec<KeyCode> {
    let mut keys = Vec::new();
    let to = target - position;
    let flat_to = Vec3::new(to.x, 0.0, to.z).normalize_or_zero();
    let flat_fwd = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();

    // Positive yaw turns +X toward -Z, i.e. left when seen from above.
    let side = flat_fwd.cross(flat_to).y;
    if side > HEADING_TOLERANCE {
        keys.push(KeyCode::KeyA);
    } else if side < -HEADING_TOLERANCE {
        keys.push(KeyCode::KeyD);
    }
    if flat_fwd.dot(flat_to) > THRUST_ALIGNMENT {
        keys.push(KeyCode::KeyW);
    }

    if to.y < -DEPTH_TOLERANCE {
        keys.push(KeyCode::ShiftLeft);
    } else if to.y > DEPTH_TOLERANCE {
        keys.push(KeyCode::Space);
    }
    keys
}
