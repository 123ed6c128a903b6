//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render feature surfaces while reading/writing shared state
//! from Leptos context providers; pages own route-scoped orchestration.

pub mod add_chatroom;
pub mod chat_list;
pub mod chat_message_form;
pub mod header;
pub mod message_box;
pub mod message_form;
pub mod message_list;
pub mod message_modal;
pub mod modal;
pub mod notification_modal;
pub mod user_list;
