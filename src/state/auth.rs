//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and identity-dependent rendering. `loading` stays
//! true until the localStorage session restore has run, so guards do not
//! flash-redirect before the stored identity is read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// Authentication state tracking the current user and restore status.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Record a successful login.
    pub fn set_user(&mut self, user: AuthUser) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Finish session restore, with or without a stored identity.
    pub fn restore(&mut self, user: Option<AuthUser>) {
        self.user = user;
        self.loading = false;
    }

    /// Drop the current identity.
    pub fn clear(&mut self) {
        self.user = None;
    }

    /// Current user id, if logged in.
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}
