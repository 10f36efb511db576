//! Pilot-facing notifications and the sink that receives them.

/// How long the UI shows a notification before dismissing it.
pub const NOTIFICATION_DISMISS_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Danger,
}

/// A transient message for the notification UI.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    /// Auto-dismiss directive for the UI collaborator.
    pub dismiss_after_ms: u64,
}

impl Notification {
    pub fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            dismiss_after_ms: NOTIFICATION_DISMISS_MS,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(NotificationKind::Danger, text)
    }
}

/// Receives notifications emitted during a tick.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Collecting sink; handy for hosts that drain after each tick, and for tests.
impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_dismiss() {
        let n = Notification::danger("hull");
        assert_eq!(n.kind, NotificationKind::Danger);
        assert_eq!(n.dismiss_after_ms, 2000);
        assert_eq!(n.text, "hull");
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::info("a"));
        sink.notify(Notification::success("b"));
        let texts: Vec<_> = sink.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, ["a", "b"]);
    }
}
