//! Pocket Widgets Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("PocketWidgets", log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
