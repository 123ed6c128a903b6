//! # hello-friends
//!
//! Leptos + WASM frontend for the Hello Friends social/messaging app.
//! All persistence, credential lookup, and realtime fan-out live in a
//! hosted backend-as-a-service; this crate is the browser client only.
//!
//! The crate contains pages, components, application state, the hosted
//! service's canonical record types, and the realtime broadcast client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entrypoint: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
