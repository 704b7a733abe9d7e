//! Reusable UI components

mod detail_modal;
mod essentials;
mod filter_panel;
mod header;
mod loading;
mod trip_card;

pub use detail_modal::*;
pub use essentials::*;
pub use filter_panel::*;
pub use header::*;
pub use loading::*;
pub use trip_card::*;
