//! # client
//!
//! Leptos UI layer for the Campus learning-management front end.
//!
//! Variant tables in `style` drive the presentational components; `pages`
//! composes them over static sample content. The crate builds for the
//! browser with `hydrate` and for server rendering with `ssr`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod style;
pub mod testing;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
