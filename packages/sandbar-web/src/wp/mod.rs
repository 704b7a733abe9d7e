//! Content-platform adapter
//!
//! The only module aware of the WordPress REST response shape. Exposes a
//! client that fetches and normalizes the two collections into the display
//! records in [`crate::types`].

mod client;
mod normalize;
mod types;

pub use client::*;
