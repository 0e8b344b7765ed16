mod app;
mod auth;
mod components;
mod config;
mod hooks;
mod services;
mod utils;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
