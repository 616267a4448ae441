//! Artzy
//!
//! Personal digital art gallery built with Leptos (WASM).
//!
//! # Features
//!
//! - Register, log in and reset passwords
//! - Upload, edit and delete artworks
//! - Gallery walls with category filter, carousel and likes
//! - Public profiles searchable by username
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Session, access, gallery and form rules live in the `artzy`
//! crate; this crate renders them and talks to the backend over HTTP.

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
