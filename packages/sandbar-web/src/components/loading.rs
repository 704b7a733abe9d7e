//! Loading components

use dioxus::prelude::*;

/// Full-width loading indicator shown while the trip fetch is in flight
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center py-20",
            div {
                class: "flex space-x-2 mb-4",
                div { class: "w-3 h-3 brand-bg rounded-full animate-bounce" }
                div { class: "w-3 h-3 brand-bg rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 brand-bg rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "text-gray-500 font-russo text-lg", "Loading your adventures..." }
        }
    }
}

/// Skeleton loader for trip cards
#[component]
pub fn TripCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-2xl border border-gray-100 overflow-hidden animate-pulse",
            div { class: "h-48 bg-gray-200" }
            div {
                class: "p-5",
                div {
                    class: "flex gap-2 mb-3",
                    div { class: "h-5 w-16 bg-gray-200 rounded" }
                    div { class: "h-5 w-20 bg-gray-200 rounded" }
                }
                div { class: "h-6 w-3/4 bg-gray-200 rounded mb-2" }
                div {
                    class: "space-y-2 mb-4",
                    div { class: "h-4 w-full bg-gray-200 rounded" }
                    div { class: "h-4 w-5/6 bg-gray-200 rounded" }
                }
                div {
                    class: "pt-4 border-t border-gray-100",
                    div { class: "h-6 w-24 bg-gray-200 rounded mb-3" }
                    div {
                        class: "flex gap-2",
                        div { class: "h-10 flex-1 bg-gray-200 rounded-lg" }
                        div { class: "h-10 flex-1 bg-gray-200 rounded-lg" }
                    }
                }
            }
        }
    }
}
