//! Message list state for the currently open chatroom.
//!
//! Messages arrive from two sources: a full fetch when a room is opened,
//! and single broadcast events while it stays open. The sender's own
//! append and a possible broadcast echo can carry the same row, so
//! appends are id-deduplicated.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatMessage;

/// Messages for the selected chatroom.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl ChatState {
    /// Replace the list wholesale from a completed fetch.
    pub fn replace(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
        self.loading = false;
    }

    /// Append one message unless a message with the same id is present.
    pub fn push_unique(&mut self, message: ChatMessage) {
        if self.messages.iter().any(|m| m.id == message.id) {
            return;
        }
        self.messages.push(message);
    }

    /// Drop all messages when leaving a room or switching rooms.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.loading = false;
    }
}
