//! Task List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod notice;
mod store;
mod sync;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, warning) = ClientConfig::load();
    if let Err(e) = console_logger::init_logger(config.level_filter()) {
        web_sys::console::warn_1(&format!("console logger not installed: {}", e).into());
    }
    if let Some(warning) = warning {
        log::warn!(target: "tasks::config", "{}", warning);
    }
    log::info!(target: "tasks", "starting, api base {:?}", config.api_base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
