//! Canonical record types for the hosted-service boundary.
//!
//! DESIGN
//! ======
//! The hosted store is schema-less: id columns arrive as numbers or strings
//! depending on the table, and the PIN column holds a number in legacy rows
//! and a string in newer ones. All of that looseness is absorbed here in a
//! single normalization step so downstream state and rendering code only
//! ever see one canonical shape per entity.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// The stored PIN column: numeric in legacy rows, string in newer ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PinValue {
    Number(i64),
    Text(String),
}

impl PinValue {
    /// Whether a validated six-digit input matches the stored value.
    ///
    /// Numeric stored values match when the input parses to the same
    /// integer (so `"012345"` matches a stored `12345`); string stored
    /// values require exact equality.
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Self::Number(n) => input.parse::<i64>() == Ok(*n),
            Self::Text(s) => s == input,
        }
    }
}

/// The authenticated identity row, exactly as persisted to localStorage.
///
/// Created out-of-band in the hosted store; read-only from this client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub username: String,
    /// Password-equivalent six-digit PIN as stored.
    #[serde(rename = "password")]
    pub pin: PinValue,
    /// Origin tag (free-form).
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub from: String,
    /// Profile picture reference (URL or empty).
    #[serde(default)]
    pub profile_pic: String,
    /// Friend-group tag; group `"0"` is visible to every group.
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub friend_group: String,
}

impl AuthUser {
    /// Display projection without the credential column.
    pub fn display(&self) -> User {
        User {
            id: self.id.clone(),
            username: self.username.clone(),
            profile_pic: self.profile_pic.clone(),
            friend_group: self.friend_group.clone(),
        }
    }
}

/// A user as shown in lists and message bubbles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub profile_pic: String,
    #[serde(default, deserialize_with = "deserialize_string_from_scalar")]
    pub friend_group: String,
}

/// A chatroom the current user belongs to.
///
/// DM pairings have no title; group rooms carry an explicit one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chatroom {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Per-chatroom unread count derived from the member's last-read timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub chatroom_id: String,
    pub unread_count: i64,
}

/// Author/recipient projection embedded in message rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageParty {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub profile_pic: String,
}

/// A chatroom-scoped message. Insert-only; never mutated or deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub chatroom_id: String,
    pub author: MessageParty,
    #[serde(rename = "message")]
    pub body: String,
    pub created_at: String,
}

/// A direct-mail message between a user and the admin (or vice versa).
/// Parallel in shape to [`ChatMessage`] but scoped to the inbox view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectMessage {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub author: MessageParty,
    pub recipient: MessageParty,
    #[serde(rename = "message")]
    pub body: String,
    pub created_at: String,
}

/// A user-scoped notification with explicit read tracking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub user_id: String,
    pub body: String,
    pub is_read: bool,
    #[serde(default)]
    pub read_at: Option<String>,
    pub created_at: String,
}

pub(crate) fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or numeric scalar")),
    }
}
