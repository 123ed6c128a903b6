//! Cross-component chatroom state: selection, unread counts, form flags.
//!
//! DESIGN
//! ======
//! Unread counts follow the polling-refresh contract: every poll replaces
//! the whole map, and a failed poll leaves the previous map in place.
//! Selecting a room zeroes its local count immediately; the service-side
//! last-read timestamp update is the caller's concern.

#[cfg(test)]
#[path = "chatroom_test.rs"]
mod chatroom_test;

use std::collections::HashMap;

use crate::net::types::UnreadCount;

/// Shared state for the chat page and its child components.
#[derive(Clone, Debug, Default)]
pub struct ChatroomState {
    /// Currently open chatroom, if any.
    pub selected: Option<String>,
    /// A chat-message send is in flight.
    pub submitting: bool,
    /// The add-chatroom popover is visible.
    pub showing_add: bool,
    /// Unread message count per chatroom id.
    pub unread_counts: HashMap<String, i64>,
}

impl ChatroomState {
    /// Replace the unread map wholesale from a completed poll.
    pub fn replace_unread_counts(&mut self, counts: &[UnreadCount]) {
        self.unread_counts = counts
            .iter()
            .map(|c| (c.chatroom_id.clone(), c.unread_count))
            .collect();
    }

    /// Open a chatroom and zero its unread count locally.
    pub fn select(&mut self, chatroom_id: String) {
        self.unread_counts.insert(chatroom_id.clone(), 0);
        self.selected = Some(chatroom_id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Unread count for a room; rooms absent from the map count as read.
    pub fn unread_count(&self, chatroom_id: &str) -> i64 {
        self.unread_counts.get(chatroom_id).copied().unwrap_or(0)
    }
}
