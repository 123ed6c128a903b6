//! Browser localStorage persistence for the authenticated identity.
//!
//! One key holds the serialized identity row: read once at app start,
//! written on login, removed on logout. Non-browser builds no-op so
//! native tests and SSR stay deterministic.

use crate::net::types::AuthUser;

#[cfg(feature = "hydrate")]
const SESSION_KEY: &str = "hello_friends_user";

/// Read the stored identity, if any. Unparsable values read as logged out.
pub fn load_session() -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(SESSION_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the identity after a successful login.
pub fn save_session(user: &AuthUser) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove the stored identity on logout.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
