//! Botboard Dashboard
//!
//! Trading bot control panel frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Live clock seeded from the server timestamp
//! - Scroll-aware navigation bar with a mobile toggle
//! - Technical-analysis line chart with an indicator selector
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page logic lives in plain modules (`clock`, `nav`, `chart`)
//! as pure functions over explicit state, so it runs under `cargo test`
//! without a browser; the components only wire those functions to signals
//! and DOM events.

use leptos::*;

mod api;
mod app;
mod chart;
mod clock;
mod components;
mod nav;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
