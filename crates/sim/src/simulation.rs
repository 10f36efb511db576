//! The simulation context and its fixed per-tick stage order.

use engine_core::Vec3;
use hecs::{Entity, World};
use input::ControlIntent;
use procgen::Population;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::FollowCamera;
use crate::config::SimConfig;
use crate::economy::{self, Upgrades};
use crate::environment;
use crate::error::SimError;
use crate::marine_life;
use crate::motion::{self, Vehicle};
use crate::notify::NotificationSink;
use crate::proximity;
use crate::readout::HudReadout;
use crate::resources::{self, ResourceState};

/// Host-provided inputs for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub intent: ControlIntent,
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Wall clock in milliseconds (animation phase and warning cooldowns).
    pub now_ms: u64,
}

/// All mutable world state for one session. Created once, passed explicitly.
pub struct Simulation {
    /// `None` until the host spawns the submarine; ticks are no-ops until then.
    pub vehicle: Option<Vehicle>,
    pub resources: ResourceState,
    pub upgrades: Upgrades,
    /// Collectables and fish.
    pub world: World,
    pub camera: Option<FollowCamera>,
    near_collectable: Option<Entity>,
    rng: StdRng,
    spawn_depth: f32,
}

impl Simulation {
    /// Empty session: no vehicle, no world entities.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            vehicle: None,
            resources: ResourceState::with_credits(config.starting_credits),
            upgrades: Upgrades::default(),
            world: World::new(),
            camera: None,
            near_collectable: None,
            rng: StdRng::seed_from_u64(config.seed),
            spawn_depth: config.spawn_depth,
        }
    }

    /// Session ready to play: submarine spawned and the world populated.
    pub fn start(config: &SimConfig, population: &Population) -> Self {
        let mut sim = Self::new(config);
        sim.populate(population);
        sim.spawn_vehicle();
        sim
    }

    /// Create the submarine at the configured spawn depth.
    pub fn spawn_vehicle(&mut self) {
        let vehicle = Vehicle::new(Vec3::new(0.0, -self.spawn_depth, 0.0));
        self.camera = Some(FollowCamera::behind(&vehicle.transform));
        self.vehicle = Some(vehicle);
        log::info!("Submarine launched at {}m", self.spawn_depth);
    }

    /// Add the initial collectables and fish.
    pub fn populate(&mut self, population: &Population) {
        for spawn in &population.collectables {
            proximity::spawn_collectable(&mut self.world, spawn);
        }
        for spawn in &population.fish {
            marine_life::spawn_fish(&mut self.world, spawn);
        }
        log::info!(
            "World populated: {} collectables, {} fish",
            population.collectables.len(),
            population.fish.len()
        );
    }

    /// Run one tick: motion, environment, resources, proximity (and interact),
    /// marine life, then the camera. Each stage reads what the one before wrote.
    pub fn tick(&mut self, input: &TickInput, sink: &mut dyn NotificationSink) {
        let Some(vehicle) = self.vehicle.as_mut() else {
            log::trace!("Tick skipped: no vehicle yet");
            return;
        };

        motion::step(vehicle, &mut self.resources, &input.intent, input.dt);

        environment::update(
            &mut self.resources,
            self.upgrades.hull_level,
            &mut self.rng,
            sink,
        );

        resources::update(
            &mut self.resources,
            &vehicle.target,
            input.now_ms,
            &mut self.rng,
            sink,
        );

        self.near_collectable =
            proximity::update(&mut self.world, vehicle.position(), input.now_ms);
        if input.intent.interact {
            proximity::interact(
                &mut self.world,
                &mut self.near_collectable,
                &mut self.resources,
                sink,
            );
        }

        marine_life::update(&mut self.world, Some(vehicle.position()), &mut self.rng);

        if let Some(camera) = self.camera.as_mut() {
            camera.update(&vehicle.transform);
        }
    }

    /// Purchase the next hull level (outside the tick, from the UI).
    pub fn upgrade_hull(&mut self, sink: &mut dyn NotificationSink) -> Result<u32, SimError> {
        economy::upgrade_hull(&mut self.resources, &mut self.upgrades, sink)
    }

    /// Nearest collectable in pickup range after the last tick.
    pub fn near_collectable(&self) -> Option<Entity> {
        self.near_collectable
    }

    pub fn collectables_remaining(&self) -> usize {
        proximity::remaining(&self.world)
    }

    pub fn readout(&self) -> HudReadout {
        HudReadout::new(
            &self.resources,
            &self.upgrades,
            self.near_collectable.is_some(),
        )
    }
}
