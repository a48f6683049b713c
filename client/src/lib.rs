//! # client
//!
//! Leptos front-end for the CV panel: ask a question about the CV and send an
//! email through an external API.
//!
//! Built twice: with `ssr` for server rendering inside the host binary, and
//! with `hydrate` for the WASM bundle that takes over in the browser and
//! performs the HTTP calls.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: read the config rendered by the host and hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::ApiConfig::from_document();
    match &config {
        Ok(cfg) => log::info!("API base: {} ({})", cfg.base_url(), cfg.ordering()),
        Err(e) => log::error!("{e}"),
    }

    leptos::mount::hydrate_body(move || view! { <app::App config=config/> });
}
