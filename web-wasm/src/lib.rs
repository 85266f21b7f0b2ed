//! Algorithm match client (Leptos + WASM)

mod api;
mod app;
mod components;
pub mod config;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
