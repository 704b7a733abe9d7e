//! Vibe filter panel

use dioxus::prelude::*;

use crate::config::CATEGORIES;
use crate::state::use_filter;

/// The "What's your vibe?" panel with the eight fixed category buttons
#[component]
pub fn FilterPanel() -> Element {
    let filters = use_filter();

    rsx! {
        div {
            class: "bg-white rounded-3xl shadow-sm border border-gray-100 p-6 flex-1 flex flex-col justify-center relative",

            div {
                class: "flex flex-col md:flex-row md:items-center justify-between mb-6 gap-2",
                div {
                    h3 { class: "font-russo text-lg text-gray-800", "What's your vibe?" }
                    p {
                        class: "text-xs text-gray-400 mt-1",
                        "Tap a category below to filter the list"
                    }
                }

                if !filters.is_empty() {
                    button {
                        class: "text-xs text-red-500 font-bold hover:underline self-start md:self-auto",
                        onclick: move |_| filters.clear(),
                        "\u{1F5D1} Clear"
                    }
                }
            }

            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-3",
                for cat in CATEGORIES {
                    button {
                        key: "{cat.id}",
                        class: if filters.is_selected(cat.id) {
                            "p-3 rounded-xl flex flex-col items-center justify-center gap-2 transition-all duration-200 border-2 text-center h-24 bg-cyan-50 brand-border shadow-sm"
                        } else {
                            "p-3 rounded-xl flex flex-col items-center justify-center gap-2 transition-all duration-200 border border-transparent text-center h-24 bg-gray-50 hover:bg-white hover:border-gray-200 hover:shadow-sm"
                        },
                        onclick: move |_| filters.toggle(cat.id),
                        span { class: "text-2xl", "{cat.icon}" }
                        span {
                            class: if filters.is_selected(cat.id) { "font-bold text-xs brand-text" } else { "font-bold text-xs text-gray-600" },
                            "{cat.label}"
                        }
                    }
                }
            }
        }
    }
}
