mod app;
mod client;
mod components;
mod config;
mod hooks;
mod modal;
mod pages;
mod routes;
mod services;
mod session;

use app::App;
use tracing_subscriber::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
