//! EcoTrack Dashboard
//!
//! Single-page dashboard for logging and visualizing organizational
//! environmental metrics (CO2, water, waste, energy), built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It is a thin client over the EcoTrack REST API: forms and
//! derived views on this side, durable state on the backend's.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
