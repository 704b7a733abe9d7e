//! Global site header

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::use_favorites;

/// Sticky header with the brand mark and the saved-trips toggle. The heart
/// switches between the browse and saved views.
#[component]
pub fn SiteHeader() -> Element {
    let favorites = use_favorites();
    let route = use_route::<Route>();

    let saved_count = favorites.count();
    let on_saved_view = matches!(route, Route::Saved {});
    let heart_target = if on_saved_view {
        Route::Home {}
    } else {
        Route::Saved {}
    };

    rsx! {
        header {
            class: "bg-white shadow-sm sticky top-0 z-50",
            div {
                class: "max-w-7xl mx-auto px-4 py-3 flex items-center justify-between",
                div {
                    class: "flex items-center gap-4",
                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-4",
                        div {
                            class: "w-12 h-12 rounded-full border-2 brand-border flex items-center justify-center text-2xl",
                            "\u{2693}"
                        }
                        h1 {
                            class: "font-russo text-xl tracking-wider hidden sm:block leading-none",
                            "SANDBAR"
                            span { class: "brand-text", "SCOUT" }
                        }
                    }
                }

                Link {
                    to: heart_target,
                    class: if on_saved_view {
                        "relative p-2 rounded-full transition bg-gray-100"
                    } else {
                        "relative p-2 rounded-full transition hover:bg-gray-50"
                    },
                    span {
                        class: if saved_count > 0 { "text-2xl text-red-400" } else { "text-2xl text-gray-400" },
                        if saved_count > 0 { "\u{2764}\u{FE0F}" } else { "\u{1F90D}" }
                    }
                    if saved_count > 0 {
                        span {
                            class: "absolute top-0 right-0 w-4 h-4 bg-red-500 text-white text-xs flex items-center justify-center rounded-full font-bold",
                            "{saved_count}"
                        }
                    }
                }
            }
        }
    }
}
