#![allow(warnings)]
//! Inventory UI Entry Point

mod models;
mod error;
mod config;
mod logging;
mod store;
mod view;
mod form;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info });
    mount_to_body(App);
}
