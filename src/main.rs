//! City Guide Frontend Entry Point

mod accounts;
mod app;
mod catalog;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod geo;
mod links;
mod logger;
mod models;
mod nearest;
mod router;
mod saved;
mod storage;
mod store;
mod task;
mod venues;

use app::App;
use config::GuideConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = GuideConfig::load();
    log::set_max_level(config.log_level());
    mount_to_body(move || view! { <App config=config /> });
    commands::register_service_worker("sw.js");
}
