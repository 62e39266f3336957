//! # novachat
//!
//! Leptos + WASM chat client for the Nova assistant backend. The client
//! authenticates against an external OIDC identity provider, keeps a
//! conversation list in sync with the backend, and exchanges messages with
//! the assistant. The session/conversation orchestration is implemented as
//! guarded state transitions in `state`.
//!
//! This crate contains pages, components, application state, network
//! types, and the REST/OIDC clients.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: mounts the app over the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
