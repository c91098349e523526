mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod models;
mod notify;
mod pages;
mod state;
mod validation;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
