//! Text HUD for the headless host: gauge line and the notification banner.

use engine_core::Lifetime;
use sim::{HudReadout, Notification, NotificationKind, NotificationSink};

/// A notification currently on screen.
pub struct ActiveNotice {
    pub text: String,
    pub lifetime: Lifetime,
}

/// Shows each notification until its dismiss timer runs out. A new
/// notification replaces the current one, like a single banner element.
pub struct NotificationBanner {
    pub current: Option<ActiveNotice>,
    /// Every notification seen this session, oldest first (capped).
    pub history: Vec<String>,
    max_history: usize,
}

impl NotificationBanner {
    pub fn new() -> Self {
        Self {
            current: None,
            history: Vec::new(),
            max_history: 50,
        }
    }

    /// Count down the banner; hides it once expired.
    pub fn update(&mut self, dt: f32) {
        if let Some(notice) = &mut self.current {
            if notice.lifetime.update(dt) {
                self.current = None;
            }
        }
    }

    pub fn visible_text(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.text.as_str())
    }
}

impl NotificationSink for NotificationBanner {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Danger | NotificationKind::Warning => {
                log::warn!("{}", notification.text)
            }
            NotificationKind::Info | NotificationKind::Success => {
                log::info!("{}", notification.text)
            }
        }
        self.history.push(notification.text.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }
        self.current = Some(ActiveNotice {
            lifetime: Lifetime::from_millis(notification.dismiss_after_ms),
            text: notification.text,
        });
    }
}

/// One-line gauge readout.
pub fn format_status(hud: &HudReadout) -> String {
    let mut line = format!(
        "O2 {:>3}% | PWR {:>3}% | {:>4}m {} ({} ATM) | minerals {} | credits {}",
        hud.oxygen,
        hud.power,
        hud.depth_m,
        hud.zone_label,
        hud.atmospheres,
        hud.minerals,
        hud.credits,
    );
    if hud.collect_prompt {
        line.push_str(" | [E] collect");
    }
    if hud.upgrade_enabled {
        line.push_str(&format!(" | {}", hud.upgrade_label));
    }
    line
}
