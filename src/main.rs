//! Penyimpanan Barang Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dialog;
mod models;
mod stock;
mod store;
mod supabase;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
