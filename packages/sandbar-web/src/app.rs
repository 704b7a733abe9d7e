//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{ContentProvider, FavoritesProvider, FilterProvider};

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        // Context providers wrap the entire app: loaded content, the active
        // vibe selection, and the persisted saved-trips set
        ContentProvider {
            FavoritesProvider {
                FilterProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
