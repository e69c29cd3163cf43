//! # portal-ui
//!
//! Leptos + WASM front-end for the account portal: a landing page with a
//! logout action, and a signup page that validates account-creation input
//! client-side and delegates the account itself to an external identity
//! provider.
//!
//! This crate contains pages, components, form state, the identity-provider
//! REST client, and browser-isolated utilities. Routing between the two
//! pages is handled by `leptos_router`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks, then hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
