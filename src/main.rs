//! Blog Console Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod hooks;
mod logging;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Config problems are logged at the default level before the configured one applies.
    logging::init(log::LevelFilter::Info);
    let config = browser::load_config();
    logging::init(config.log_level());
    log::info!("blog console starting, api={}", config.api_base_url);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
