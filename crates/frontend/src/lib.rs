pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::AppConfig;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            panic!("invalid configuration: {}", e);
        }
    };
    log::info!("API base URL: {}", config.api_base_url);

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
