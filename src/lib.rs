//! # socialmagic-ui
//!
//! Leptos + WASM page glue for the SocialMagic scheduling app: ajax form
//! submission, flash messages, dashboard stat polling, file selection lists,
//! and the responsive sidebar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns routes, models and auth. This crate only calls into its
//! submit, action and stats endpoints. State machines live in `state`, I/O
//! seams (transport, clock, spawner) in `net` and `util`, and Leptos views in
//! `components` and `pages`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_helpers;

/// WASM entry point: install panic/console logging and hydrate the body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let config = config::UiConfig::from_page();
    let level = config.log_level().unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    leptos::mount::hydrate_body(app::App);
}
