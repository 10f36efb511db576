//! Seeded placement of mineral crystals and fish schools on the seabed.
//!
//! Produces plain spawn descriptors only; turning them into world entities is
//! the simulation's job.

use glam::Vec3;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// How many things to place and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// RNG seed; the same seed always yields the same layout.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_collectable_count")]
    pub collectable_count: usize,
    #[serde(default = "default_fish_count")]
    pub fish_count: usize,
}

fn default_seed() -> u64 {
    0x5EAB_ED00
}
fn default_collectable_count() -> usize {
    15
}
fn default_fish_count() -> usize {
    8
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            collectable_count: default_collectable_count(),
            fish_count: default_fish_count(),
        }
    }
}

/// Initial placement of one mineral crystal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectableSpawn {
    pub position: Vec3,
    /// Reward in minerals (1–5).
    pub value: u32,
    /// Yaw added per tick while idle.
    pub rotation_speed: f32,
    /// Bob frequency factor applied to the wall clock.
    pub bob_speed: f32,
}

/// Initial placement of one fish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FishSpawn {
    pub position: Vec3,
    pub velocity: Vec3,
    pub swim_radius: f32,
}

/// Complete initial layout for one session.
#[derive(Debug, Clone, Default)]
pub struct Population {
    pub collectables: Vec<CollectableSpawn>,
    pub fish: Vec<FishSpawn>,
}

// ── Placement volumes ──────────────────────────────────────────────────────
/// Crystals scatter over a 150×150 patch just above the seafloor.
const COLLECTABLE_SPREAD: f32 = 150.0;
const COLLECTABLE_Y_MIN: f32 = -45.0;
const COLLECTABLE_Y_RANGE: f32 = 10.0;
/// Fish roam a wider 200×200 patch in the upper water column.
const FISH_SPREAD: f32 = 200.0;
const FISH_Y_MIN: f32 = -20.0;
const FISH_Y_RANGE: f32 = 30.0;

impl Population {
    /// Generate a layout from config.
    pub fn generate(config: &PopulationConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);

        let collectables = (0..config.collectable_count)
            .map(|_| CollectableSpawn {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * COLLECTABLE_SPREAD,
                    COLLECTABLE_Y_MIN + rng.gen::<f32>() * COLLECTABLE_Y_RANGE,
                    (rng.gen::<f32>() - 0.5) * COLLECTABLE_SPREAD,
                ),
                value: rng.gen_range(1..=5),
                rotation_speed: rng.gen_range(0.01..0.03),
                bob_speed: rng.gen_range(0.02..0.05),
            })
            .collect::<Vec<_>>();

        let fish = (0..config.fish_count)
            .map(|_| FishSpawn {
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * FISH_SPREAD,
                    FISH_Y_MIN + rng.gen::<f32>() * FISH_Y_RANGE,
                    (rng.gen::<f32>() - 0.5) * FISH_SPREAD,
                ),
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 0.2,
                    (rng.gen::<f32>() - 0.5) * 0.1,
                    (rng.gen::<f32>() - 0.5) * 0.2,
                ),
                swim_radius: rng.gen_range(30.0..50.0),
            })
            .collect::<Vec<_>>();

        log::debug!(
            "Generated population (seed {}): {} collectables, {} fish",
            config.seed,
            collectables.len(),
            fish.len()
        );

        Self { collectables, fish }
    }
}
