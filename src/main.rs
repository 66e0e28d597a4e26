//! Morent - Dioxus Fullstack Web Storefront
//!
//! A fullstack SSR web application built with Dioxus that renders the
//! car rental marketplace landing page.
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
mod catalog;
mod components;
mod pages;
mod routes;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
