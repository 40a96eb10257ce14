//! Songbook Web UI
//!
//! Browser front end for the singer roster, built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page
//! - Singers list with edit mode and confirmed deletes
//! - Add-singer form that merges songs into existing singers
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Each page fetches its own data from the singer API on mount;
//! view state and merge logic come from the `songbook` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
