//! Notification list state with explicit read tracking.
//!
//! The list follows the polling-refresh contract; mark-read operations
//! mutate local state only after the service acknowledged the change.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// The current user's notifications, newest first as fetched.
#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Replace the list wholesale from a completed poll.
    pub fn replace(&mut self, items: Vec<Notification>) {
        self.items = items;
    }

    /// Number of notifications not yet read (drives the header badge).
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Flag one notification read. Only the named notification changes.
    pub fn mark_read(&mut self, id: &str, read_at: &str) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.is_read = true;
            item.read_at = Some(read_at.to_owned());
        }
    }

    /// Flag every notification read.
    pub fn mark_all_read(&mut self, read_at: &str) {
        for item in &mut self.items {
            item.is_read = true;
            item.read_at = Some(read_at.to_owned());
        }
    }
}
