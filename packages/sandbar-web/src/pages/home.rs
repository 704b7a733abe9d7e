//! Home page: browse and filter the trip grid

use dioxus::prelude::*;

use crate::components::{
    DetailModal, EssentialsPanel, FilterPanel, SiteHeader, TripCard, TripCardSkeleton,
};
use crate::config::MAIN_SITE_URL;
use crate::state::{use_content, use_filter};
use crate::types::TripListing;

/// Home page - hero, vibe filters, the trip grid, and the essentials section
#[component]
pub fn Home() -> Element {
    let content = use_content();
    let filters = use_filter();
    let mut detail = use_signal(|| None::<TripListing>);

    // Recomputed whenever the loaded trips or the selection change
    let visible = use_memo(move || filters.apply(&content.trips.read()));

    let is_loading = content.is_loading();
    let error = content.error.read().clone();
    let has_selection = !filters.is_empty();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 font-roboto text-slate-800 pb-12",

            SiteHeader {}

            div {
                class: "max-w-7xl mx-auto px-4 py-8",

                a {
                    href: MAIN_SITE_URL,
                    class: "inline-flex items-center gap-2 text-xs font-bold text-gray-500 hover:text-cyan-600 mb-4 uppercase tracking-wide transition",
                    "\u{2190} Back to the main site"
                }

                // Hero + filters
                div {
                    class: "grid grid-cols-1 lg:grid-cols-12 gap-6 mb-8",

                    div {
                        class: "lg:col-span-5 relative h-72 lg:h-auto rounded-3xl overflow-hidden shadow-md group",
                        img {
                            src: "https://images.pexels.com/photos/3426880/pexels-photo-3426880.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
                            alt: "Couple holding hands on sandbar",
                            class: "absolute inset-0 w-full h-full object-cover transition-transform duration-1000 group-hover:scale-105"
                        }
                        div { class: "absolute inset-0 bg-gradient-to-t from-slate-900/90 via-slate-900/40 to-transparent" }
                        div {
                            class: "absolute bottom-0 left-0 p-8 w-full",
                            h2 {
                                class: "font-russo text-3xl md:text-4xl text-white leading-tight drop-shadow-md mb-3",
                                "Find Your Perfect "
                                br {}
                                span { class: "text-cyan-300", "Key West Sandbar" }
                            }
                            p {
                                class: "text-slate-200 text-sm md:text-base font-medium leading-relaxed drop-shadow-sm max-w-md",
                                "There are over 170+ sandbar trips in Key West. Tell us your vibe, and we'll match you with the perfect boat."
                            }
                        }
                    }

                    div {
                        class: "lg:col-span-7 flex flex-col h-full",
                        FilterPanel {}
                    }
                }

                // Results heading
                div {
                    class: "mb-6 flex items-center justify-between",
                    h3 {
                        class: "font-russo text-2xl text-gray-800",
                        if has_selection { "Matched Trips" } else { "All Adventures" }
                        span {
                            class: "ml-3 text-sm font-roboto font-normal text-gray-500 bg-gray-100 px-2 py-1 rounded-full align-middle",
                            if is_loading { "Loading..." } else { "{visible().len()} Results" }
                        }
                    }
                }

                // Loading state
                if is_loading {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for i in 0..6 {
                            TripCardSkeleton { key: "{i}" }
                        }
                    }
                }

                // Error state: no grid is rendered at all
                else if let Some(message) = error {
                    div {
                        class: "bg-red-50 text-red-500 p-8 rounded-xl text-center border border-red-100",
                        h3 { class: "font-bold text-lg mb-2", "Oops!" }
                        p { "{message}" }
                    }
                }

                // Empty state with one-click filter reset
                else if visible().is_empty() {
                    div {
                        class: "bg-white rounded-xl p-12 text-center border-dashed border-2 border-gray-200 mt-6",
                        div { class: "text-4xl mb-4", "\u{2693}\u{FE0F}" }
                        h3 { class: "font-russo text-xl text-gray-800 mb-2", "No trips match that exact combo" }
                        p { class: "text-gray-500 mb-6", "Try removing one of the filters to see more options." }
                        button {
                            class: "text-cyan-600 font-bold hover:underline",
                            onclick: move |_| filters.clear(),
                            "Clear all filters"
                        }
                    }
                }

                // Results grid
                else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for trip in visible() {
                            {
                                let trip_for_modal = trip.clone();
                                rsx! {
                                    TripCard {
                                        key: "{trip.id}",
                                        trip: trip.clone(),
                                        on_details: move |_| detail.set(Some(trip_for_modal.clone())),
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "mt-8 mb-4",
                        p {
                            class: "text-[10px] text-gray-400 text-center italic",
                            "Transparency: Sandbar Scout may earn a commission from bookings made through these links at no extra cost to you."
                        }
                    }
                }

                EssentialsPanel {}
            }

            // Detail overlay
            if let Some(trip) = detail() {
                DetailModal {
                    trip,
                    on_close: move |_| detail.set(None),
                }
            }
        }
    }
}
