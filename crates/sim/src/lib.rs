//! Deepwater simulation core.
//!
//! One [`Simulation`] per session, advanced once per rendered frame with
//! [`Simulation::tick`]. Stage order within a tick is fixed:
//! motion → environment → resources → proximity (+ interact) → marine life.
//! Renderers and UI read the state after the tick returns.

pub mod camera;
pub mod config;
pub mod economy;
pub mod environment;
pub mod error;
pub mod marine_life;
pub mod motion;
pub mod notify;
pub mod proximity;
pub mod readout;
pub mod resources;
pub mod simulation;

pub use camera::FollowCamera;
pub use config::SimConfig;
pub use economy::{Reward, Upgrades};
pub use environment::PressureZone;
pub use error::SimError;
pub use motion::Vehicle;
pub use notify::{Notification, NotificationKind, NotificationSink};
pub use readout::HudReadout;
pub use resources::ResourceState;
pub use simulation::{Simulation, TickInput};
