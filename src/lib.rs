//! # fintrack
//!
//! Leptos + WASM front-end for a personal-finance tracker. Authenticated
//! users record income/expense transactions and categorized expenses, and
//! view dashboards, reports, and monthly summaries computed by a remote REST
//! backend.
//!
//! The crate contains pages, components, shared session state, and the REST
//! helpers. All persistence and aggregation lives behind the backend API;
//! the only durable client state is the bearer token slot in localStorage.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}
