// lib.rs - Root module for the shop_admin library
//
// The library holds everything the admin screen needs: the shared data
// model, the repository seam with its in-memory and Postgres backends,
// the screen state machine and the Leptos components that render it.

/// Schema and seed data for the Postgres backend
pub mod fixtures;

/// The Leptos web application (model, repositories, components, pages)
pub mod web_app;

/// WASM entry point: hydrates the server-rendered page in the browser
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
