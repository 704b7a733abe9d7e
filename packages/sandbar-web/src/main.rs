//! Sandbar Scout - Dioxus Fullstack Web Application
//!
//! Browse, filter, and shortlist Key West sandbar trips sourced from the
//! content API, plus affiliate product recommendations.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod pages;
mod routes;
mod state;
mod types;
mod wp;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
