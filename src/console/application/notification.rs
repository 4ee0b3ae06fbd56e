use std::time::{Duration, Instant};

use crate::console::constants::NOTIFICATION_LIFETIME_MS;
use crate::console::domain::models::{Notification, Severity};

struct Scheduled {
    notification: Notification,
    expires_at: Instant,
}

/// Single-slot, auto-expiring message channel.
///
/// Posting replaces the slot together with its deadline, so an earlier
/// notification's expiry can never clear a later one.
pub struct NotificationScheduler {
    lifetime: Duration,
    slot: Option<Scheduled>,
}

impl Default for NotificationScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(NOTIFICATION_LIFETIME_MS))
    }
}

impl NotificationScheduler {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            slot: None,
        }
    }

    pub fn post(&mut self, message: impl Into<String>, severity: Severity) {
        self.post_at(message, severity, Instant::now());
    }

    pub fn post_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.slot = Some(Scheduled {
            notification: Notification {
                message: message.into(),
                severity,
                created_at: now,
            },
            expires_at: now + self.lifetime,
        });
    }

    pub fn current(&self) -> Option<&Notification> {
        self.slot.as_ref().map(|s| &s.notification)
    }

    /// Clears the slot if its own deadline has passed.
    pub fn expire_due(&mut self, now: Instant) -> bool {
        match &self.slot {
            Some(scheduled) if now >= scheduled.expires_at => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }
}
