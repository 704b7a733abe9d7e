//! Top-level pages

mod home;
mod saved;

pub use home::*;
pub use saved::*;
