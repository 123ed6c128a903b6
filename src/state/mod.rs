//! Application-state modules provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one explicit state object. `App` creates the signals at
//! startup and provides them by context; views read and update them through
//! the methods here rather than mutating fields ad hoc, so the transition
//! rules stay testable without a browser.

pub mod auth;
pub mod chat;
pub mod chatroom;
pub mod inbox;
pub mod modal;
pub mod notifications;
