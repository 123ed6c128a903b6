//! Hosted-service configuration resolved at compile time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client is served statically, so service endpoints and the admin
//! identity are baked in at build time via environment variables, with
//! localhost defaults for development.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL for the service's REST interface.
pub fn rest_base() -> &'static str {
    option_env!("HELLO_FRIENDS_SERVICE_URL").unwrap_or("http://localhost:54321")
}

/// Base URL for the service's realtime websocket interface.
pub fn realtime_base() -> &'static str {
    option_env!("HELLO_FRIENDS_REALTIME_URL").unwrap_or("ws://localhost:54321")
}

/// Publishable service key sent with every request.
pub fn anon_key() -> &'static str {
    option_env!("HELLO_FRIENDS_ANON_KEY").unwrap_or("dev-anon-key")
}

/// The single configured admin identity, if any.
pub fn admin_user_id() -> Option<&'static str> {
    option_env!("HELLO_FRIENDS_ADMIN_USER_ID")
}

/// Whether `user_id` is the configured admin identity.
///
/// There is exactly one admin; no role system exists. An unset admin id
/// means nobody is admin.
pub fn is_admin(user_id: &str) -> bool {
    is_admin_id(admin_user_id(), user_id)
}

fn is_admin_id(admin: Option<&str>, user_id: &str) -> bool {
    admin.is_some_and(|id| id == user_id)
}
