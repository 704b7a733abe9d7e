//! Saved page: tabular comparison of favorited trips

use dioxus::prelude::*;

use crate::components::{DetailModal, LoadingSpinner, SiteHeader};
use crate::routes::Route;
use crate::state::{use_content, use_favorites};
use crate::types::{display_tag, TripListing};

/// Saved page - the user's stash, resolved against the loaded trips
#[component]
pub fn Saved() -> Element {
    let content = use_content();
    let favorites = use_favorites();
    let mut detail = use_signal(|| None::<TripListing>);

    // Saved-insertion order; ids that no longer resolve are simply skipped
    let saved_trips = favorites.resolve(&content.trips.read());
    let is_loading = content.is_loading();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 font-roboto text-slate-800 pb-12",

            SiteHeader {}

            div {
                class: "max-w-5xl mx-auto px-4 py-8",
                div {
                    class: "mb-8",
                    Link {
                        to: Route::Home {},
                        class: "text-gray-500 hover:text-cyan-600 font-bold flex items-center gap-2 mb-4",
                        "\u{2190} Back to Search"
                    }
                    h2 {
                        class: "font-russo text-3xl md:text-4xl text-gray-800",
                        "Your Sandbar Stash \u{2764}\u{FE0F}"
                    }
                    p {
                        class: "text-gray-500 mt-2",
                        "You have saved {saved_trips.len()} trips. Compare them below or book your favorite."
                    }
                }

                if is_loading {
                    LoadingSpinner {}
                } else if !saved_trips.is_empty() {
                    div {
                        class: "bg-white rounded-xl shadow-sm border border-gray-100 overflow-hidden",
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "w-full text-left",
                                thead {
                                    class: "bg-gray-50",
                                    tr {
                                        class: "text-gray-500 text-xs uppercase tracking-wider",
                                        th { class: "py-4 px-6 font-bold", "Trip Details" }
                                        th { class: "py-4 px-6 font-bold", "Duration" }
                                        th { class: "py-4 px-6 font-bold", "Price" }
                                        th { class: "py-4 px-6 text-right font-bold", "Actions" }
                                    }
                                }
                                tbody {
                                    class: "divide-y divide-gray-100",
                                    for trip in saved_trips {
                                        {
                                            let trip_for_modal = trip.clone();
                                            rsx! {
                                                SavedTripRow {
                                                    key: "{trip.id}",
                                                    trip: trip.clone(),
                                                    on_details: move |_| detail.set(Some(trip_for_modal.clone())),
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: "text-center py-20 bg-white rounded-xl border border-dashed border-gray-300",
                        div { class: "text-6xl mb-4 opacity-50", "\u{1F3DD}\u{FE0F}" }
                        h3 { class: "font-russo text-xl text-gray-400", "Your stash is empty" }
                        Link {
                            to: Route::Home {},
                            class: "mt-4 inline-block text-cyan-600 font-bold hover:underline",
                            "Go find some trips!"
                        }
                    }
                }
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

#[derive(Props, Clone, PartialEq)]
struct SavedTripRowProps {
    trip: TripListing,
    on_details: EventHandler<()>,
}

#[component]
fn SavedTripRow(props: SavedTripRowProps) -> Element {
    let favorites = use_favorites();
    let on_details = props.on_details;
    let trip = &props.trip;
    let trip_id = trip.id;

    rsx! {
        tr {
            class: "group hover:bg-blue-50/30 transition",
            td {
                class: "py-4 px-6",
                div {
                    class: "flex items-center gap-4 cursor-pointer",
                    onclick: move |_| on_details.call(()),
                    img {
                        src: "{trip.image}",
                        alt: "",
                        class: "w-16 h-16 rounded-lg object-cover shadow-sm"
                    }
                    div {
                        div { class: "font-bold text-gray-800 text-lg", "{trip.title}" }
                        div {
                            class: "flex gap-2 mt-1",
                            for tag in trip.tags.iter().take(2) {
                                span {
                                    key: "{tag}",
                                    class: "text-[10px] bg-gray-100 text-gray-600 px-2 py-0.5 rounded uppercase",
                                    "{display_tag(tag)}"
                                }
                            }
                        }
                    }
                }
            }
            td { class: "py-4 px-6 text-gray-600 font-medium", "{trip.duration}" }
            td {
                class: "py-4 px-6",
                div { class: "font-russo brand-text text-lg", "${trip.price}" }
                div { class: "text-xs text-gray-400", "{trip.price_type}" }
            }
            td {
                class: "py-4 px-6 text-right",
                div {
                    class: "flex items-center justify-end gap-3",
                    button {
                        class: "p-2 text-gray-400 hover:text-cyan-600 hover:bg-cyan-50 rounded-full transition",
                        title: "View Details",
                        onclick: move |_| on_details.call(()),
                        "\u{2139}\u{FE0F}"
                    }
                    button {
                        class: "p-2 text-gray-400 hover:text-red-500 hover:bg-red-50 rounded-full transition",
                        title: "Remove",
                        onclick: move |_| favorites.toggle(trip_id),
                        "\u{1F5D1}"
                    }
                    a {
                        href: "{trip.affiliate_link}",
                        target: "_blank",
                        rel: "noreferrer",
                        class: "brand-bg text-white px-5 py-2 rounded-lg font-bold shadow hover:brightness-110 transition ml-2 whitespace-nowrap",
                        "Book Now"
                    }
                }
            }
        }
    }
}
