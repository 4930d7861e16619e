//! Devfolio Client
//!
//! Yew WASM frontend for the portfolio site.
//!
//! This crate is WASM-only. Use `trunk build` or `cargo check --target wasm32-unknown-unknown`.

#[cfg(not(target_arch = "wasm32"))]
compile_error!(
    "devfolio-client only supports wasm32 target. Use: cargo check -p devfolio-client --target wasm32-unknown-unknown"
);

mod app;
mod canvas;
mod components;
mod hooks;
mod pages;
mod routes;
mod services;
mod util;

use app::App;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_web::MakeWebConsoleWriter;

fn main() {
    pages::set_panic_hook();

    let filter = EnvFilter::new("info,devfolio_core=info,devfolio_client=debug");

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    yew::Renderer::<App>::new().render();
}
