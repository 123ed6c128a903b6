//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, polls) and
//! delegates rendering details to `components`.

pub mod chat;
pub mod home;
pub mod login;
pub mod messages;
pub mod profile;
