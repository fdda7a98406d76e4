//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    console_logger::init(config.log_level);
    tracing::info!(api = %config.api_base_url, "Starting todo list");

    mount_to_body(move || view! { <App config=config.clone() /> });
}
