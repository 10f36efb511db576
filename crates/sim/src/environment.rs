//! Pressure zones: how deep the hull is relative to what it can take.

use rand::Rng;

use crate::notify::{Notification, NotificationSink};
use crate::resources::ResourceState;

/// Everything shallower than this is the surface zone, regardless of hull.
pub const SURFACE_ZONE_DEPTH: f32 = 10.0;
/// Max safe depth of a level-1 hull.
pub const BASE_MAX_SAFE_DEPTH: f32 = 100.0;
/// Extra safe depth per hull level above 1.
pub const MAX_SAFE_DEPTH_PER_LEVEL: f32 = 50.0;

const SHALLOW_FRACTION: f32 = 0.3;
const DEEP_FRACTION: f32 = 0.6;

/// Discrete hazard tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PressureZone {
    #[default]
    Surface,
    Shallow,
    Deep,
    Abyssal,
    CrushDepth,
}

impl PressureZone {
    /// Oxygen drained per tick while submerged in this zone.
    pub fn oxygen_consumption(&self) -> f32 {
        match self {
            PressureZone::Surface => 0.02,
            PressureZone::Shallow => 0.03,
            PressureZone::Deep => 0.045,
            PressureZone::Abyssal => 0.06,
            PressureZone::CrushDepth => 0.15,
        }
    }

    /// Divisor applied to thruster power draw (lower = more drain).
    pub fn power_efficiency(&self) -> f32 {
        match self {
            PressureZone::Surface | PressureZone::Shallow => 1.0,
            PressureZone::Deep => 0.9,
            PressureZone::Abyssal => 0.8,
            PressureZone::CrushDepth => 0.6,
        }
    }

    /// Per-tick chance of a hull-stress notification, and its text.
    pub fn hazard(&self) -> Option<(f32, &'static str)> {
        match self {
            PressureZone::Abyssal => Some((0.005, "High Pressure - Hull Stress Detected!")),
            PressureZone::CrushDepth => Some((0.02, "DANGER - HULL INTEGRITY FAILING!")),
            _ => None,
        }
    }

    /// Name shown on the depth gauge.
    pub fn label(&self) -> &'static str {
        match self {
            PressureZone::Surface => "Surface",
            PressureZone::Shallow => "Shallow",
            PressureZone::Deep => "Deep",
            PressureZone::Abyssal => "Abyssal",
            PressureZone::CrushDepth => "CRUSH DEPTH",
        }
    }

    /// Gauge colour, green through red.
    pub fn color_hex(&self) -> &'static str {
        match self {
            PressureZone::Surface => "#00ff88",
            PressureZone::Shallow => "#88ff00",
            PressureZone::Deep => "#ffff00",
            PressureZone::Abyssal => "#ff8800",
            PressureZone::CrushDepth => "#ff0000",
        }
    }
}

/// Deepest point the hull rates as safe.
pub fn max_safe_depth(hull_level: u32) -> f32 {
    BASE_MAX_SAFE_DEPTH + hull_level.saturating_sub(1) as f32 * MAX_SAFE_DEPTH_PER_LEVEL
}

/// Classify a depth. Ranges are half-open and checked shallow to deep.
pub fn classify(depth: f32, hull_level: u32) -> PressureZone {
    let max_depth = max_safe_depth(hull_level);
    match depth {
        d if d < SURFACE_ZONE_DEPTH => PressureZone::Surface,
        d if d < max_depth * SHALLOW_FRACTION => PressureZone::Shallow,
        d if d < max_depth * DEEP_FRACTION => PressureZone::Deep,
        d if d < max_depth => PressureZone::Abyssal,
        _ => PressureZone::CrushDepth,
    }
}

/// Environment stage.
///
/// Reads `resources.depth` and the hull level; writes `pressure_zone`,
/// `oxygen_consumption_rate` and `power_efficiency`. May emit a hull-stress
/// notification (independent draw every tick, no cooldown).
pub fn update<R: Rng + ?Sized>(
    resources: &mut ResourceState,
    hull_level: u32,
    rng: &mut R,
    sink: &mut dyn NotificationSink,
) {
    let zone = classify(resources.depth, hull_level);
    if zone != resources.pressure_zone {
        log::debug!(
            "Pressure zone {:?} -> {:?} at {:.1}m",
            resources.pressure_zone,
            zone,
            resources.depth
        );
    }
    resources.pressure_zone = zone;
    resources.oxygen_consumption_rate = zone.oxygen_consumption();
    resources.power_efficiency = zone.power_efficiency();

    if let Some((chance, text)) = zone.hazard() {
        if rng.gen::<f32>() < chance {
            sink.notify(Notification::danger(text));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zones_for_level_one_hull() {
        assert_eq!(classify(5.0, 1), PressureZone::Surface);
        assert_eq!(classify(40.0, 1), PressureZone::Shallow);
        assert_eq!(classify(65.0, 1), PressureZone::Deep);
        assert_eq!(classify(95.0, 1), PressureZone::Abyssal);
        assert_eq!(classify(150.0, 1), PressureZone::CrushDepth);
    }

    #[test]
    fn boundaries_are_half_open() {
        assert_eq!(classify(0.0, 1), PressureZone::Surface);
        assert_eq!(classify(10.0, 1), PressureZone::Shallow);
        assert_eq!(classify(30.5, 1), PressureZone::Deep);
        assert_eq!(classify(60.5, 1), PressureZone::Abyssal);
        assert_eq!(classify(100.0, 1), PressureZone::CrushDepth);
    }

    #[test]
    fn hull_upgrade_shifts_boundaries() {
        assert_eq!(max_safe_depth(1), 100.0);
        assert_eq!(max_safe_depth(2), 150.0);
        assert_eq!(max_safe_depth(3), 200.0);
        // Level 2: shallow < 45, deep < 90, abyssal < 150.
        assert_eq!(classify(44.0, 2), PressureZone::Shallow);
        assert_eq!(classify(95.0, 2), PressureZone::Abyssal);
        assert_eq!(classify(80.0, 2), PressureZone::Deep);
        assert_eq!(classify(120.0, 2), PressureZone::Abyssal);
        assert_eq!(classify(150.0, 2), PressureZone::CrushDepth);
    }

    #[test]
    fn shallow_band_ends_at_thirty_percent() {
        assert_eq!(classify(29.9, 1), PressureZone::Shallow);
        assert_eq!(classify(29.9, 3), PressureZone::Shallow);
        assert_eq!(classify(60.0, 3), PressureZone::Deep);
    }

    #[test]
    fn update_writes_rates() {
        let mut resources = ResourceState {
            depth: 150.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut sink: Vec<Notification> = Vec::new();
        update(&mut resources, 1, &mut rng, &mut sink);
        assert_eq!(resources.pressure_zone, PressureZone::CrushDepth);
        assert_eq!(resources.oxygen_consumption_rate, 0.15);
        assert_eq!(resources.power_efficiency, 0.6);
    }

    #[test]
    fn hazard_draws_only_in_deep_zones() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut sink: Vec<Notification> = Vec::new();
        let mut resources = ResourceState {
            depth: 50.0,
            ..Default::default()
        };
        for _ in 0..5_000 {
            update(&mut resources, 1, &mut rng, &mut sink);
        }
        assert!(sink.is_empty());

        resources.depth = 150.0;
        for _ in 0..5_000 {
            update(&mut resources, 1, &mut rng, &mut sink);
        }
        // ~100 expected at 2%.
        assert!(sink.len() > 40 && sink.len() < 200, "got {}", sink.len());
        assert!(sink.iter().all(|n| n.text == "DANGER - HULL INTEGRITY FAILING!"));
    }

    #[test]
    fn abyssal_hull_stress_at_half_a_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sink: Vec<Notification> = Vec::new();
        let mut resources = ResourceState {
            depth: 95.0,
            ..Default::default()
        };
        for _ in 0..20_000 {
            update(&mut resources, 1, &mut rng, &mut sink);
        }
        assert_eq!(resources.pressure_zone, PressureZone::Abyssal);
        assert_eq!(resources.oxygen_consumption_rate, 0.06);
        assert_eq!(resources.power_efficiency, 0.8);
        // ~100 expected at 0.5%.
        assert!(sink.len() > 40 && sink.len() < 200, "got {}", sink.len());
        assert!(sink
            .iter()
            .all(|n| n.text == "High Pressure - Hull Stress Detected!"
                && n.kind == NotificationKind::Danger));
    }
}
