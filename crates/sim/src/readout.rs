//! Post-tick values for the HUD, already rounded the way the gauges show them.

use crate::economy::Upgrades;
use crate::resources::ResourceState;

#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    /// Rounded up, so 0.3% still reads 1.
    pub oxygen: u32,
    pub power: u32,
    /// Bar fill, 0..=100 (power tops out at 85).
    pub oxygen_bar: f32,
    pub power_bar: f32,
    pub minerals: u32,
    pub credits: u32,
    /// Whole metres, rounded down.
    pub depth_m: u32,
    pub zone_label: &'static str,
    pub zone_color: &'static str,
    pub atmospheres: u32,
    pub upgrade_label: String,
    pub upgrade_enabled: bool,
    /// Show the "press E to collect" prompt.
    pub collect_prompt: bool,
}

impl HudReadout {
    pub fn new(resources: &ResourceState, upgrades: &Upgrades, collect_prompt: bool) -> Self {
        let cost = upgrades.hull_upgrade_cost();
        Self {
            oxygen: resources.oxygen.ceil() as u32,
            power: resources.power.ceil() as u32,
            oxygen_bar: resources.oxygen,
            power_bar: resources.power,
            minerals: resources.minerals,
            credits: resources.credits,
            depth_m: resources.depth.floor() as u32,
            zone_label: resources.pressure_zone.label(),
            zone_color: resources.pressure_zone.color_hex(),
            atmospheres: resources.atmospheres(),
            upgrade_label: format!(
                "Upgrade Hull (Lvl {}) - {} Credits",
                upgrades.hull_level + 1,
                cost
            ),
            upgrade_enabled: upgrades.can_afford_hull(resources),
            collect_prompt,
        }
    }
}
