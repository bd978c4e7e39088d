//! Reusable Dioxus components for the marketplace admin client.

pub mod components;

pub use components::*;
