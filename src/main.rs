//! Goal Board Frontend Entry Point

mod models;
mod config;
mod logging;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logging::init(config.log_level);
    if let Err(e) = commands::init(&config) {
        log::error!("{}", e);
    }

    mount_to_body(App);
}
