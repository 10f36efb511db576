//! Session start parameters for the simulation.

use serde::{Deserialize, Serialize};

/// Starting conditions. Per-tick tuning constants live next to the stage that uses them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Seed for hazard draws and fish jitter.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_starting_credits")]
    pub starting_credits: u32,
    /// Depth (metres) the submarine spawns at.
    #[serde(default = "default_spawn_depth")]
    pub spawn_depth: f32,
}

fn default_seed() -> u64 {
    0xD1CE
}
fn default_starting_credits() -> u32 {
    500
}
fn default_spawn_depth() -> f32 {
    10.0
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            starting_credits: default_starting_credits(),
            spawn_depth: default_spawn_depth(),
        }
    }
}
