//! People Table Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    log::info!("Starting people table, data from {}", config.people_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
