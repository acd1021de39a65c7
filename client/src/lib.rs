//! # coworking-client
//!
//! Leptos + WASM navigation shell for the coworking front-end.
//!
//! The crate declares the two application routes (`/` and `/dashboard`),
//! the pages mounted on them, and the HTML shell the site host renders for
//! SSR + hydration. Routing itself is delegated to `leptos_router`.

pub mod app;
pub mod pages;
pub mod routes;

/// Browser entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::debug!("hydrating coworking shell");
    leptos::mount::hydrate_body(app::App);
}
