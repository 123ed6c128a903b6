//! Networking modules for the hosted-service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the service's table-style REST interface, `realtime` manages
//! the per-chatroom broadcast channel, `config` resolves service endpoints,
//! and `types` defines the canonical record shapes.

pub mod api;
pub mod config;
pub mod realtime;
pub mod types;
