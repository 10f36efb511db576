//! Mineral rewards and hull upgrades.

use engine_core::Transform;
use hecs::{Entity, World};

use crate::environment;
use crate::error::SimError;
use crate::notify::{Notification, NotificationSink};
use crate::proximity::{Collectable, Glow};
use crate::resources::ResourceState;

/// Credits paid per mineral unit collected.
pub const CREDITS_PER_MINERAL: u32 = 10;
/// Hull upgrade price per current hull level.
pub const HULL_UPGRADE_COST_PER_LEVEL: u32 = 1000;

/// Purchased upgrades. Persist for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Upgrades {
    pub hull_level: u32,
}

impl Default for Upgrades {
    fn default() -> Self {
        Self { hull_level: 1 }
    }
}

impl Upgrades {
    pub fn max_safe_depth(&self) -> f32 {
        environment::max_safe_depth(self.hull_level)
    }

    /// Price of the next hull level.
    pub fn hull_upgrade_cost(&self) -> u32 {
        HULL_UPGRADE_COST_PER_LEVEL * self.hull_level
    }

    /// Whether the wallet covers the next hull level (drives button enablement).
    pub fn can_afford_hull(&self, resources: &ResourceState) -> bool {
        resources.credits >= self.hull_upgrade_cost()
    }
}

/// What a pickup paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub minerals: u32,
    pub credits: u32,
}

/// Award a collectable and mark it consumed.
///
/// The consumed entity keeps only its `Collectable` (with `alive == false`),
/// so its id stays valid while renderers stop seeing it. Returns `None`
/// without touching the wallet if the entity is already consumed or is not
/// a collectable at all.
pub fn collect(
    world: &mut World,
    entity: Entity,
    resources: &mut ResourceState,
    sink: &mut dyn NotificationSink,
) -> Option<Reward> {
    let value = {
        let Ok(mut item) = world.get::<&mut Collectable>(entity) else {
            log::warn!("Collect requested for non-collectable {:?}", entity);
            return None;
        };
        if !item.alive {
            return None;
        }
        item.alive = false;
        item.value
    };
    if world.remove::<(Transform, Glow)>(entity).is_err() {
        log::warn!("Collectable {:?} was missing its transform or glow", entity);
    }

    let reward = Reward {
        minerals: value,
        credits: value * CREDITS_PER_MINERAL,
    };
    resources.minerals += reward.minerals;
    resources.credits += reward.credits;

    log::debug!("Collected {:?}: {:?}", entity, reward);
    sink.notify(Notification::success(format!(
        "+{} Minerals, +{} Credits",
        reward.minerals, reward.credits
    )));
    Some(reward)
}

/// Buy the next hull level. Returns the new level.
pub fn upgrade_hull(
    resources: &mut ResourceState,
    upgrades: &mut Upgrades,
    sink: &mut dyn NotificationSink,
) -> Result<u32, SimError> {
    let cost = upgrades.hull_upgrade_cost();
    if resources.credits < cost {
        sink.notify(Notification::warning("Not enough credits for hull upgrade!"));
        return Err(SimError::InsufficientCredits {
            cost,
            available: resources.credits,
        });
    }

    resources.credits -= cost;
    upgrades.hull_level += 1;
    log::info!(
        "Hull upgraded to level {} (max safe depth {}m)",
        upgrades.hull_level,
        upgrades.max_safe_depth()
    );
    sink.notify(Notification::success(format!(
        "Hull Upgraded to Level {}!",
        upgrades.hull_level
    )));
    Ok(upgrades.hull_level)
}
