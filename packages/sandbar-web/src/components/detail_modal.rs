//! Trip detail modal

use dioxus::prelude::*;

use crate::state::use_favorites;
use crate::types::{display_tag, TripListing};

/// Props for DetailModal
#[derive(Props, Clone, PartialEq)]
pub struct DetailModalProps {
    pub trip: TripListing,
    /// Fired on backdrop click, the close button, or save-and-close.
    pub on_close: EventHandler<()>,
}

/// Modal with the full trip detail, rendered above either view
#[component]
pub fn DetailModal(props: DetailModalProps) -> Element {
    let favorites = use_favorites();
    let on_close = props.on_close;
    let trip = &props.trip;
    let trip_id = trip.id;
    let is_saved = favorites.is_saved(trip_id);

    rsx! {
        div {
            class: "fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/60 backdrop-blur-sm",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto shadow-2xl relative",
                onclick: move |e: Event<MouseData>| e.stop_propagation(),

                button {
                    class: "absolute top-4 right-4 p-2 bg-gray-100 rounded-full hover:bg-gray-200 transition z-10",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }

                div {
                    class: "h-64 relative",
                    img {
                        src: "{trip.image}",
                        alt: "{trip.title}",
                        class: "w-full h-full object-cover"
                    }
                    div {
                        class: "absolute bottom-0 left-0 right-0 bg-gradient-to-t from-black/80 to-transparent p-6 pt-20",
                        h3 { class: "font-russo text-2xl text-white drop-shadow-md", "{trip.title}" }
                    }
                }

                div {
                    class: "p-6 md:p-8 space-y-6",
                    div {
                        class: "flex flex-wrap gap-2",
                        for tag in trip.tags.iter() {
                            span {
                                key: "{tag}",
                                class: "text-xs font-bold text-cyan-700 bg-cyan-100 px-3 py-1 rounded-full uppercase",
                                "{display_tag(tag)}"
                            }
                        }
                    }

                    div {
                        class: "grid grid-cols-2 gap-4 bg-gray-50 p-4 rounded-xl border border-gray-100",
                        div {
                            div { class: "text-xs text-gray-400 uppercase tracking-wider font-bold", "Duration" }
                            div { class: "font-russo text-lg text-gray-800", "{trip.duration}" }
                        }
                        div {
                            div { class: "text-xs text-gray-400 uppercase tracking-wider font-bold", "Price" }
                            div {
                                class: "font-russo text-lg brand-text",
                                "${trip.price} "
                                span { class: "text-sm text-gray-500 font-normal", "/ {trip.price_type}" }
                            }
                        }
                    }

                    div {
                        h4 { class: "font-russo text-lg mb-2", "About this Trip" }
                        p {
                            class: "text-gray-600 leading-relaxed whitespace-pre-line",
                            "{trip.long_description}"
                        }
                    }

                    div {
                        class: "pt-4 border-t border-gray-100",
                        div {
                            class: "flex flex-col sm:flex-row gap-4 mb-4",
                            a {
                                href: "{trip.affiliate_link}",
                                target: "_blank",
                                rel: "noreferrer",
                                class: "flex-1 brand-bg text-white py-3 rounded-xl font-bold text-center shadow-lg hover:brightness-110 transition",
                                "\u{1F4C5} Book Now"
                            }
                            button {
                                class: if is_saved {
                                    "flex-1 border py-3 rounded-xl font-bold transition border-red-200 bg-red-50 text-red-500"
                                } else {
                                    "flex-1 border py-3 rounded-xl font-bold transition border-gray-200 hover:bg-gray-50 text-gray-700"
                                },
                                onclick: move |_| {
                                    favorites.toggle(trip_id);
                                    on_close.call(());
                                },
                                if is_saved { "\u{2764}\u{FE0F} Remove from Stash" } else { "\u{1F90D} Save to Stash" }
                            }
                        }

                        p {
                            class: "text-[10px] text-gray-400 text-center leading-tight",
                            "Transparency: Sandbar Scout may earn a small commission if you book through these links, at no extra cost to you. This allows us to keep our trip planning free for you!"
                        }
                    }
                }
            }
        }
    }
}
