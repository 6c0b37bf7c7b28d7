//! A2P Academy Website
//!
//! Client-side rendered Leptos application (WASM) for the academy's public
//! pages, sign-in and admin listings.
//!
//! # Architecture
//!
//! Page behavior logic (menu state, validation, counters, parallax, stars)
//! lives in the `a2p-academy` crate; this crate wires it to the DOM. All
//! backend calls go through the shared `ApiClient`, with [`api::WindowHost`]
//! providing alerts, navigation and reloads.

use leptos::*;

mod api;
mod app;
mod components;
mod dom;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
