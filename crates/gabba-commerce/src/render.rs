//! View-models for the cart badge and toast notifications.

use std::time::{Duration, Instant};

use crate::notify::{CartObserver, Notification, NOTIFICATION_TTL};

/// Item count badge, rendered as `(N)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartBadge {
    count: u64,
}

impl CartBadge {
    pub fn new(count: u64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn text(&self) -> String {
        format!("({})", self.count)
    }
}

impl CartObserver for CartBadge {
    fn on_count_changed(&mut self, item_count: u64) {
        self.count = item_count;
    }
}

/// A notification on screen since `shown_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Single toast slot. Showing a toast replaces the one on screen.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    current: Option<Toast>,
    ttl: Duration,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Put `notification` on screen, dropping whatever was there.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        self.current = Some(Toast {
            notification,
            shown_at: now,
        });
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Dismiss the toast if its time is up, returning it.
    ///
    /// Does nothing when the slot is already empty.
    pub fn expire(&mut self, now: Instant) -> Option<Notification> {
        let due = self
            .current
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.shown_at) >= self.ttl);
        if due {
            self.current.take().map(|t| t.notification)
        } else {
            None
        }
    }

    /// Remove the toast immediately.
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.current.take().map(|t| t.notification)
    }
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl CartObserver for ToastSlot {
    fn on_notification(&mut self, notification: &Notification) {
        self.show(notification.clone(), Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        let mut badge = CartBadge::default();
        assert_eq!(badge.text(), "(0)");
        badge.on_count_changed(3);
        assert_eq!(badge.text(), "(3)");
    }

    #[test]
    fn test_toast_replaces_previous() {
        let now = Instant::now();
        let mut slot = ToastSlot::new();
        slot.show(Notification::success("first"), now);
        slot.show(Notification::info("second"), now);
        assert_eq!(slot.current().unwrap().notification.message, "second");
    }

    #[test]
    fn test_toast_expires_after_ttl() {
        let start = Instant::now();
        let mut slot = ToastSlot::new();
        slot.show(Notification::success("added"), start);

        assert_eq!(slot.expire(start + Duration::from_millis(3999)), None);
        assert!(slot.current().is_some());

        let dismissed = slot.expire(start + NOTIFICATION_TTL);
        assert_eq!(dismissed, Some(Notification::success("added")));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_expire_on_empty_slot_is_noop() {
        let mut slot = ToastSlot::new();
        assert_eq!(slot.expire(Instant::now()), None);
        slot.show(Notification::info("x"), Instant::now());
        slot.dismiss();
        assert_eq!(slot.expire(Instant::now() + NOTIFICATION_TTL), None);
    }
}
