//! Session configuration (pacing, world layout, starting conditions). Loaded from config.ron at startup.

use procgen::PopulationConfig;
use serde::{Deserialize, Serialize};
use sim::SimConfig;

/// Persistent game settings. Loaded from `config.ron` in the current directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Simulation ticks per second.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_hz: f64,
    /// Ticks to run before the session ends.
    #[serde(default = "default_session_ticks")]
    pub session_ticks: u64,
    /// Sleep between ticks to match the tick rate (otherwise run as fast as possible).
    #[serde(default)]
    pub realtime: bool,
    /// Log a HUD line every N ticks (0 disables).
    #[serde(default = "default_hud_interval")]
    pub hud_log_interval: u64,
    /// Viewport width used to centre touch steering.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub population: PopulationConfig,
}

fn default_tick_rate() -> f64 {
    60.0
}
fn default_session_ticks() -> u64 {
    60 * 60 * 5
}
fn default_hud_interval() -> u64 {
    300
}
fn default_viewport_width() -> f32 {
    1280.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: default_tick_rate(),
            session_ticks: default_session_ticks(),
            realtime: false,
            hud_log_interval: default_hud_interval(),
            viewport_width: default_viewport_width(),
            sim: SimConfig::default(),
            population: PopulationConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Whether a `config.ron` is present.
    pub fn exists() -> bool {
        config_path().exists()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from(".")).join("config.ron")
}
