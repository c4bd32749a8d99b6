//! Checkout pages: shipping address entry and payment review.
//!
//! Client-rendered with Leptos. The two pages hand the checkout state to each
//! other through a single `state` query parameter and mirror the derived
//! totals into local storage.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Checkout starting...");

    if let Err(err) = lib_core::config::init_config() {
        log::warn!("Using default checkout configuration: {}", err);
    }

    leptos::mount::mount_to_body(|| view! { <App/> });
}
