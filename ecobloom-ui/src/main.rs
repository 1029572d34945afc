//! EcoBloom Web UI
//!
//! Plant catalog, garden and watering reminders built with Leptos (WASM).
//!
//! # Features
//!
//! - Searchable plant catalog with detail view
//! - My Garden with morning and evening watering checklists
//! - Add plants, or look one up from a photo by name
//! - Watering reminders while the page is open
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Model, store, view models and actions come from the
//! `ecobloom` crate; this crate only renders them and talks to the backend
//! through browser fetch.

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
