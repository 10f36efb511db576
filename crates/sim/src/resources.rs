//! Oxygen, power and wallet: per-tick drain/regen plus warning gating.

use engine_core::Velocity;
use rand::Rng;

use crate::environment::PressureZone;
use crate::notify::{Notification, NotificationSink};

pub const OXYGEN_MAX: f32 = 100.0;
/// Power regenerates only up to this, never to 100.
pub const POWER_MAX: f32 = 85.0;

/// Oxygen gained per tick while surfaced.
const OXYGEN_SURFACE_REGEN: f32 = 2.0;
const SURFACED_NOTICE_CHANCE: f32 = 0.01;

/// Power drawn per tick while thrusting, before efficiency.
const POWER_DRAIN: f32 = 0.03;
/// Power regained per tick while idle.
const POWER_REGEN: f32 = 0.08;
/// Depletion warning re-arms once power climbs above this.
const POWER_REARM_LEVEL: f32 = 1.0;

/// Oxygen warning tiers, tightest last: (upper bound inclusive, lower bound exclusive, cooldown ms, text).
/// All tiers share one cooldown timestamp.
const OXYGEN_WARNINGS: [(f32, f32, u64, &str); 3] = [
    (30.0, 15.0, 3000, "OXYGEN LOW - Consider Surfacing!"),
    (15.0, 5.0, 2000, "CRITICAL OXYGEN - Surface NOW!"),
    (5.0, 0.0, 1000, "EMERGENCY - OXYGEN DEPLETED!"),
];

/// Consumables, wallet, and the depth-derived values every stage reads.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState {
    /// 0..=100
    pub oxygen: f32,
    /// 0..=85
    pub power: f32,
    pub minerals: u32,
    pub credits: u32,

    /// max(0, -vehicle.y), written by motion.
    pub depth: f32,
    /// vehicle.y > -10, written by motion.
    pub is_at_surface: bool,

    /// Written by the environment stage.
    pub pressure_zone: PressureZone,
    pub oxygen_consumption_rate: f32,
    pub power_efficiency: f32,

    /// Wall-clock ms of the last oxygen warning (shared by all tiers).
    pub last_oxygen_warning_at: Option<u64>,
    /// Latch: set when the depletion warning fires, cleared above 1.0 power.
    pub power_depleted_notified: bool,
}

impl Default for ResourceState {
    fn default() -> Self {
        Self {
            oxygen: OXYGEN_MAX,
            power: POWER_MAX,
            minerals: 0,
            credits: 0,
            depth: 0.0,
            is_at_surface: false,
            pressure_zone: PressureZone::Surface,
            oxygen_consumption_rate: PressureZone::Surface.oxygen_consumption(),
            power_efficiency: PressureZone::Surface.power_efficiency(),
            last_oxygen_warning_at: None,
            power_depleted_notified: false,
        }
    }
}

impl ResourceState {
    /// Session start: full tanks and some pocket money.
    pub fn with_credits(credits: u32) -> Self {
        Self {
            credits,
            ..Default::default()
        }
    }

    /// Pressure in atmospheres, one per 10m plus the surface atmosphere.
    pub fn atmospheres(&self) -> u32 {
        (self.depth / 10.0).floor() as u32 + 1
    }
}

/// Resource ledger stage.
///
/// Reads `is_at_surface`, the zone rates and the vehicle's target velocity
/// (intent, not smoothed motion); writes `oxygen`, `power`, the oxygen
/// cooldown timestamp and the depletion latch.
pub fn update<R: Rng + ?Sized>(
    resources: &mut ResourceState,
    target: &Velocity,
    now_ms: u64,
    rng: &mut R,
    sink: &mut dyn NotificationSink,
) {
    update_oxygen(resources, now_ms, rng, sink);
    update_power(resources, !target.is_zero(), sink);
}

fn update_oxygen<R: Rng + ?Sized>(
    resources: &mut ResourceState,
    now_ms: u64,
    rng: &mut R,
    sink: &mut dyn NotificationSink,
) {
    if resources.is_at_surface && resources.oxygen < OXYGEN_MAX {
        resources.oxygen = (resources.oxygen + OXYGEN_SURFACE_REGEN).min(OXYGEN_MAX);
        if rng.gen::<f32>() < SURFACED_NOTICE_CHANCE {
            sink.notify(Notification::info("Surfaced - Oxygen Regenerating!"));
        }
    } else if !resources.is_at_surface && resources.oxygen > 0.0 {
        resources.oxygen = (resources.oxygen - resources.oxygen_consumption_rate).max(0.0);
    }

    let since_last = resources
        .last_oxygen_warning_at
        .map_or(u64::MAX, |t| now_ms.saturating_sub(t));
    let tier = OXYGEN_WARNINGS
        .iter()
        .find(|(upper, lower, _, _)| resources.oxygen <= *upper && resources.oxygen > *lower);
    if let Some(&(_, _, cooldown_ms, text)) = tier {
        if since_last >= cooldown_ms {
            sink.notify(Notification::warning(text));
            resources.last_oxygen_warning_at = Some(now_ms);
        }
    }
}

fn update_power(resources: &mut ResourceState, is_moving: bool, sink: &mut dyn NotificationSink) {
    if is_moving && resources.power > 0.0 {
        resources.power = (resources.power - POWER_DRAIN / resources.power_efficiency).max(0.0);
    } else if !is_moving && resources.power < POWER_MAX {
        resources.power = (resources.power + POWER_REGEN).min(POWER_MAX);
    }

    if resources.power <= 0.0 && !resources.power_depleted_notified {
        log::info!("Power depleted");
        sink.notify(Notification::danger("POWER DEPLETED - Movement Impaired!"));
        resources.power_depleted_notified = true;
    } else if resources.power > POWER_REARM_LEVEL {
        resources.power_depleted_notified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::Vec3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn thrusting() -> Velocity {
        Velocity::new(Vec3::new(5.0, 0.0, 0.0))
    }

    fn submerged(oxygen: f32) -> ResourceState {
        ResourceState {
            oxygen,
            depth: 20.0,
            is_at_surface: false,
            oxygen_consumption_rate: 0.03,
            ..Default::default()
        }
    }

    #[test]
    fn oxygen_drains_when_submerged_and_stays_at_floor() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = Vec::new();
        let mut r = submerged(0.05);
        update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        assert!((r.oxygen - 0.02).abs() < 1e-6);
        for i in 0..10 {
            update(&mut r, &Velocity::default(), i * 16, &mut rng, &mut sink);
            assert_eq!(r.oxygen, 0.0);
        }
    }

    #[test]
    fn oxygen_regenerates_at_surface_and_caps() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = Vec::new();
        let mut r = ResourceState {
            oxygen: 99.0,
            is_at_surface: true,
            ..Default::default()
        };
        update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        assert_eq!(r.oxygen, OXYGEN_MAX);
    }

    #[test]
    fn surfaced_notice_only_while_refilling() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut sink: Vec<Notification> = Vec::new();
        let mut r = ResourceState {
            is_at_surface: true,
            ..Default::default()
        };
        for i in 0..10_000 {
            r.oxygen = 50.0;
            update(&mut r, &Velocity::default(), i * 16, &mut rng, &mut sink);
        }
        // ~100 expected at 1%.
        assert!(sink.len() > 40 && sink.len() < 200, "got {}", sink.len());
        assert!(sink.iter().all(|n| n.text == "Surfaced - Oxygen Regenerating!"));

        // Full tank: no refill, no notice.
        sink.clear();
        r.oxygen = OXYGEN_MAX;
        for i in 0..5_000 {
            update(&mut r, &Velocity::default(), i * 16, &mut rng, &mut sink);
        }
        assert_eq!(r.oxygen, OXYGEN_MAX);
        assert!(sink.is_empty());
    }

    #[test]
    fn oxygen_warning_shares_one_cooldown() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink: Vec<Notification> = Vec::new();
        let mut r = submerged(25.0);
        r.oxygen_consumption_rate = 0.0;

        update(&mut r, &Velocity::default(), 10_000, &mut rng, &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].text, "OXYGEN LOW - Consider Surfacing!");

        // Low tier re-arms after 3s.
        update(&mut r, &Velocity::default(), 12_999, &mut rng, &mut sink);
        assert_eq!(sink.len(), 1);
        update(&mut r, &Velocity::default(), 13_000, &mut rng, &mut sink);
        assert_eq!(sink.len(), 2);

        // Dropping into the critical tier uses the same timestamp, with a 2s gate.
        r.oxygen = 10.0;
        update(&mut r, &Velocity::default(), 14_999, &mut rng, &mut sink);
        assert_eq!(sink.len(), 2);
        update(&mut r, &Velocity::default(), 15_000, &mut rng, &mut sink);
        assert_eq!(sink.len(), 3);
        assert_eq!(sink[2].text, "CRITICAL OXYGEN - Surface NOW!");

        // Emergency tier: 1s gate.
        r.oxygen = 3.0;
        update(&mut r, &Velocity::default(), 16_000, &mut rng, &mut sink);
        assert_eq!(sink.len(), 4);
        assert_eq!(r.last_oxygen_warning_at, Some(16_000));
    }

    #[test]
    fn no_oxygen_warning_above_thirty() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink: Vec<Notification> = Vec::new();
        let mut r = submerged(30.5);
        r.oxygen_consumption_rate = 0.0;
        update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn power_drain_scales_with_efficiency() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = Vec::new();
        let mut r = submerged(100.0);
        r.power = 50.0;
        r.power_efficiency = 0.6;
        update(&mut r, &thrusting(), 0, &mut rng, &mut sink);
        assert!((r.power - (50.0 - 0.05)).abs() < 1e-5);
    }

    #[test]
    fn power_regenerates_only_to_eighty_five() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = Vec::new();
        let mut r = submerged(100.0);
        r.power = 84.95;
        update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        assert_eq!(r.power, POWER_MAX);
        update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        assert_eq!(r.power, POWER_MAX);
    }

    #[test]
    fn turning_alone_counts_as_moving() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = Vec::new();
        let mut r = submerged(100.0);
        r.power = 40.0;
        let turning = Velocity::with_angular(Vec3::ZERO, Vec3::new(0.0, 1.5, 0.0));
        update(&mut r, &turning, 0, &mut rng, &mut sink);
        assert!(r.power < 40.0);
    }

    #[test]
    fn depletion_latch_fires_once_and_rearms_above_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink: Vec<Notification> = Vec::new();
        let mut r = submerged(100.0);
        r.power = 0.02;

        update(&mut r, &thrusting(), 0, &mut rng, &mut sink);
        assert_eq!(r.power, 0.0);
        let depleted = |s: &Vec<Notification>| {
            s.iter().filter(|n| n.text.starts_with("POWER DEPLETED")).count()
        };
        assert_eq!(depleted(&sink), 1);

        // Held at zero: no repeat.
        for _ in 0..5 {
            update(&mut r, &thrusting(), 0, &mut rng, &mut sink);
        }
        assert_eq!(depleted(&sink), 1);

        // Recover to within the hysteresis band: still latched.
        for _ in 0..10 {
            update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        }
        assert!(r.power > 0.0 && r.power <= 1.0);
        assert!(r.power_depleted_notified);

        // Past 1.0 the latch clears.
        for _ in 0..5 {
            update(&mut r, &Velocity::default(), 0, &mut rng, &mut sink);
        }
        assert!(r.power > 1.0);
        assert!(!r.power_depleted_notified);

        // Drain again: fires a second time.
        while r.power > 0.0 {
            update(&mut r, &thrusting(), 0, &mut rng, &mut sink);
        }
        assert_eq!(depleted(&sink), 2);
    }

    #[test]
    fn atmospheres_from_depth() {
        let mut r = ResourceState::default();
        assert_eq!(r.atmospheres(), 1);
        r.depth = 19.9;
        assert_eq!(r.atmospheres(), 2);
        r.depth = 100.0;
        assert_eq!(r.atmospheres(), 11);
    }
}
