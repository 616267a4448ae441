//! Backend access for the web app.

pub mod client;

pub use client::*;
