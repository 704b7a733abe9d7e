//! Trip card component

use dioxus::prelude::*;

use crate::state::use_favorites;
use crate::types::{display_tag, TripListing};

/// Props for TripCard
#[derive(Props, Clone, PartialEq)]
pub struct TripCardProps {
    pub trip: TripListing,
    /// Fired when the user asks for the detail view.
    pub on_details: EventHandler<()>,
}

/// Trip card shown in the browse grid
#[component]
pub fn TripCard(props: TripCardProps) -> Element {
    let favorites = use_favorites();
    let on_details = props.on_details;
    let trip = &props.trip;
    let trip_id = trip.id;
    let is_saved = favorites.is_saved(trip_id);
    let is_luxury = trip.has_tag("luxury");
    let adults_only = trip.has_tag("adults_only");

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-sm hover:shadow-xl transition-all duration-300 border border-gray-100 flex flex-col overflow-hidden group",

            // Image with save toggle and badges
            div {
                class: "relative h-48 overflow-hidden cursor-pointer",
                onclick: move |_| on_details.call(()),
                img {
                    src: "{trip.image}",
                    alt: "{trip.title}",
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                }
                button {
                    class: "absolute top-3 right-3 p-2 bg-white/90 backdrop-blur-sm rounded-full shadow-md hover:bg-white transition z-10",
                    onclick: move |e: Event<MouseData>| {
                        e.stop_propagation();
                        favorites.toggle(trip_id);
                    },
                    span {
                        class: if is_saved { "text-red-500" } else { "text-gray-400 hover:text-red-400" },
                        if is_saved { "\u{2764}\u{FE0F}" } else { "\u{1F90D}" }
                    }
                }
                if is_luxury {
                    span {
                        class: "absolute top-3 left-3 bg-slate-900 text-white text-xs font-bold px-3 py-1 rounded-full uppercase tracking-wider",
                        "Luxury"
                    }
                }
                if adults_only {
                    span {
                        class: if is_luxury {
                            "absolute top-3 left-24 bg-black text-amber-400 border border-amber-400/50 text-xs font-bold px-3 py-1 rounded-full uppercase tracking-wider shadow-md"
                        } else {
                            "absolute top-3 left-3 bg-black text-amber-400 border border-amber-400/50 text-xs font-bold px-3 py-1 rounded-full uppercase tracking-wider shadow-md"
                        },
                        "18+ Adults Only"
                    }
                }
            }

            div {
                class: "p-5 flex-1 flex flex-col",
                div {
                    class: "flex flex-wrap gap-2 mb-3",
                    for tag in trip.tags.iter().take(3) {
                        span {
                            key: "{tag}",
                            class: "text-xs font-medium text-cyan-600 bg-cyan-50 px-2 py-1 rounded",
                            "{display_tag(tag)}"
                        }
                    }
                }

                h4 {
                    class: "font-russo text-xl text-gray-800 mb-2 leading-snug flex-1 cursor-pointer hover:text-cyan-600 transition",
                    onclick: move |_| on_details.call(()),
                    "{trip.title}"
                }

                p {
                    class: "text-gray-500 text-sm mb-4 line-clamp-2",
                    "{trip.description}"
                }

                div {
                    class: "mt-auto pt-4 border-t border-gray-100",
                    div {
                        class: "mb-3",
                        div { class: "text-xs text-gray-400 font-medium uppercase tracking-wide", "Starting at" }
                        div {
                            class: "font-russo text-xl brand-text",
                            "${trip.price} "
                            span { class: "text-sm text-gray-500 font-roboto font-normal", "/ {trip.price_type}" }
                        }
                    }
                    div {
                        class: "flex gap-2",
                        button {
                            class: "flex-1 bg-gray-100 text-gray-700 px-3 py-2.5 rounded-lg font-bold hover:bg-gray-200 transition text-sm",
                            onclick: move |_| on_details.call(()),
                            "Details"
                        }
                        a {
                            href: "{trip.affiliate_link}",
                            target: "_blank",
                            rel: "noreferrer",
                            class: "flex-1 brand-bg text-white px-3 py-2.5 rounded-lg font-bold shadow-md hover:brightness-110 transition text-sm text-center",
                            "Book Now"
                        }
                    }
                }
            }
        }
    }
}
