//! # dobro-client
//!
//! Leptos + WASM frontend for the charity-auction marketplace. Donors
//! put items up as lots, buyers bid, charities run the auctions and
//! receive the proceeds.
//!
//! The crate is organized around observable stores: `state/` holds the
//! session and domain stores, `net/` the REST resource clients, and
//! `routes/` the table and guard consulted before every navigation.
//! Pages and components are thin wiring over the stores.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
