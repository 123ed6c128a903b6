//! Direct-mail inbox state, including the admin dual-view.
//!
//! DESIGN
//! ======
//! The admin view fetches the full message superset once per poll and
//! filters it locally: selecting a user narrows the visible list to that
//! pair's conversation, matching author or recipient in either direction.
//! Selecting the same user again is a toggle back to the unselected,
//! empty view, not a selection stack.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use crate::net::types::{DirectMessage, User};

/// Admin-side inbox: all users, the full message superset, and the
/// currently selected conversation.
#[derive(Clone, Debug, Default)]
pub struct AdminInboxState {
    pub users: Vec<User>,
    pub selected: Option<User>,
    pub all_messages: Vec<DirectMessage>,
    /// Visible conversation; empty unless a user is selected.
    pub messages: Vec<DirectMessage>,
}

impl AdminInboxState {
    /// Replace the superset wholesale and refresh the visible slice.
    pub fn replace_all_messages(&mut self, messages: Vec<DirectMessage>) {
        self.all_messages = messages;
        self.messages = match &self.selected {
            Some(user) => conversation_with(&self.all_messages, &user.id),
            None => Vec::new(),
        };
    }

    /// Select a user, or deselect when the same user is clicked again.
    pub fn toggle_user(&mut self, user: &User) {
        if self.selected.as_ref().is_some_and(|s| s.id == user.id) {
            self.selected = None;
            self.messages = Vec::new();
        } else {
            self.selected = Some(user.clone());
            self.messages = conversation_with(&self.all_messages, &user.id);
        }
    }

    /// Messages involving a user in either direction.
    pub fn message_count(&self, user_id: &str) -> usize {
        self.all_messages
            .iter()
            .filter(|m| m.author.id == user_id || m.recipient.id == user_id)
            .count()
    }
}

/// Filter a message superset down to one user's conversation.
///
/// Matching is commutative on author/recipient, so both sides of the
/// exchange stay visible.
pub fn conversation_with(all: &[DirectMessage], user_id: &str) -> Vec<DirectMessage> {
    all.iter()
        .filter(|m| m.author.id == user_id || m.recipient.id == user_id)
        .cloned()
        .collect()
}
