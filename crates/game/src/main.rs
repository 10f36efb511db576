//! Deepwater - headless host for the underwater exploration simulation.
//!
//! Owns the frame loop: samples time, turns held keys into a control intent,
//! ticks the simulation once per frame and reads the result back for the HUD.

mod autopilot;
mod config;
mod hud;

use anyhow::Result;
use engine_core::Time;
use input::InputState;
use procgen::Population;
use sim::{Simulation, TickInput};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use autopilot::Autopilot;
use config::GameConfig;
use hud::NotificationBanner;

fn wall_clock_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn run(config: &GameConfig) -> Result<()> {
    if config.tick_rate_hz <= 0.0 {
        anyhow::bail!("tick_rate_hz must be positive, got {}", config.tick_rate_hz);
    }

    let population = Population::generate(&config.population);
    let mut sim = Simulation::start(&config.sim, &population);

    let mut time = Time::new().with_epoch_ms(wall_clock_epoch_ms());
    time.set_fixed_rate(config.tick_rate_hz);
    let frame_budget = Duration::from_secs_f64(1.0 / config.tick_rate_hz);

    let mut input = InputState::new(config.viewport_width);
    let mut banner = NotificationBanner::new();
    let mut pilot = Autopilot::new();

    for frame in 0..config.session_ticks {
        if config.realtime {
            std::thread::sleep(frame_budget);
            time.update();
        } else {
            time.advance_fixed();
        }

        pilot.drive(&sim, &mut input);
        let tick = TickInput {
            intent: input.control_intent(),
            dt: time.delta_seconds(),
            now_ms: time.wall_clock_ms(),
        };
        sim.tick(&tick, &mut banner);

        if pilot.wants_upgrade(&sim) {
            if let Err(e) = sim.upgrade_hull(&mut banner) {
                log::debug!("Upgrade rejected: {}", e);
            }
        }
        banner.update(time.delta_seconds());

        if config.hud_log_interval > 0 && frame % config.hud_log_interval == 0 {
            log::info!("{}", hud::format_status(&sim.readout()));
        }
    }

    let r = &sim.resources;
    log::info!(
        "Session over after {} ticks ({:.1}s): {} minerals, {} credits, hull level {}, {} crystals left, {} notifications",
        time.frame_count(),
        time.elapsed_seconds(),
        r.minerals,
        r.credits,
        sim.upgrades.hull_level,
        sim.collectables_remaining(),
        banner.history.len(),
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Deepwater");

    let config = GameConfig::load();
    if !GameConfig::exists() {
        config.save();
    }

    run(&config)
}
