// Views and browser bindings only build for wasm32; native builds compile the
// shared logic so its unit tests run with plain `cargo test`. Only the plain
// native binary, whose `main` is empty, silences unused items.
#![cfg_attr(all(not(target_arch = "wasm32"), not(test)), allow(dead_code, unused_imports))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = app_lib::config::AppConfig::load();
    if let Err(err) = app_lib::logging::init(&config) {
        web_sys::console::warn_1(&format!("logging disabled: {err}").into());
    }
    tracing::info!(
        version = app_lib::build_info::version(),
        commit = app_lib::build_info::git_commit_hash(),
        api = %config.api_base_url,
        "starting Wigell Car Rentals"
    );
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
