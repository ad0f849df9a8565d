//! Cart observers and user-facing notifications.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(4000);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

/// Receives cart events. Both hooks default to doing nothing.
pub trait CartObserver {
    /// The total item count changed (or may have).
    fn on_count_changed(&mut self, _item_count: u64) {}

    /// A message should be shown to the user.
    fn on_notification(&mut self, _notification: &Notification) {}
}

/// Lets a caller keep a handle to an observer it registered with a store.
impl<T: CartObserver> CartObserver for Rc<RefCell<T>> {
    fn on_count_changed(&mut self, item_count: u64) {
        self.borrow_mut().on_count_changed(item_count);
    }

    fn on_notification(&mut self, notification: &Notification) {
        self.borrow_mut().on_notification(notification);
    }
}

/// Forwards notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl CartObserver for LogObserver {
    fn on_count_changed(&mut self, item_count: u64) {
        tracing::debug!(item_count, "cart count changed");
    }

    fn on_notification(&mut self, notification: &Notification) {
        tracing::info!(
            severity = %notification.severity,
            message = %notification.message,
            "notification"
        );
    }
}
