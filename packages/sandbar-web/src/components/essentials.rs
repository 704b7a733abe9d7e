//! Sandbar essentials section

use dioxus::prelude::*;

use crate::config::STOREFRONT_URL;
use crate::state::use_content;
use crate::types::EssentialItem;

/// Props for EssentialCard
#[derive(Props, Clone, PartialEq)]
pub struct EssentialCardProps {
    pub item: EssentialItem,
}

/// A single affiliate product card
#[component]
pub fn EssentialCard(props: EssentialCardProps) -> Element {
    let item = &props.item;

    rsx! {
        div {
            class: "bg-white rounded-2xl p-5 shadow-sm hover:shadow-lg transition flex flex-col",
            div {
                class: "flex items-center gap-4 mb-4",
                img {
                    src: "{item.img}",
                    alt: "{item.name}",
                    class: "w-20 h-20 rounded-xl bg-gray-100 object-cover"
                }
                div {
                    div { class: "font-bold text-gray-800 text-lg leading-tight", "{item.name}" }
                    div { class: "text-sm text-gray-500 mt-1", "{item.price}" }
                }
            }
            a {
                href: "{item.link}",
                target: "_blank",
                rel: "sponsored noopener noreferrer",
                class: "mt-auto w-full bg-orange-500 text-white py-2.5 rounded-xl font-bold text-center hover:bg-orange-600 transition shadow-md shadow-orange-200",
                "View on Amazon"
            }
        }
    }
}

/// The essentials section at the bottom of the home page. Rendered
/// independently of the trips error state; a failed essentials fetch only
/// leaves the list empty.
#[component]
pub fn EssentialsPanel() -> Element {
    let content = use_content();
    let essentials = content.essentials.read().clone();
    let is_loading = content.is_loading();

    rsx! {
        div {
            class: "mt-16 bg-gradient-to-br from-orange-50 to-amber-50 rounded-3xl p-8 border border-orange-100 pb-12",
            div {
                class: "flex items-center gap-3 mb-6",
                div {
                    class: "p-2 bg-orange-100 rounded-lg text-3xl",
                    "\u{2600}\u{FE0F}"
                }
                div {
                    h3 { class: "font-russo text-2xl text-gray-900", "Sandbar Essentials" }
                    p {
                        class: "text-sm text-gray-500",
                        "Don't head to the sandbar without these captain-approved picks!"
                    }
                }
            }

            if !essentials.is_empty() {
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6",
                    for item in essentials {
                        EssentialCard { key: "{item.id}", item: item.clone() }
                    }
                }
            } else {
                div {
                    class: "text-center py-8 text-gray-400",
                    if is_loading { "Loading essentials..." } else { "No essentials found." }
                }
            }

            div {
                class: "mt-8 pt-4 border-t border-orange-100",
                p {
                    class: "text-xs text-gray-500 text-center max-w-3xl mx-auto leading-relaxed italic",
                    "Transparency: As an Amazon Associate, Sandbar Scout earns from qualifying purchases at no extra cost to you. This helps keep our trip planning free!"
                }
            }

            div {
                class: "mt-6 text-center",
                a {
                    href: STOREFRONT_URL,
                    target: "_blank",
                    rel: "sponsored noopener noreferrer",
                    class: "inline-flex items-center gap-2 bg-white text-gray-600 border border-gray-200 px-6 py-3 rounded-full font-bold hover:bg-gray-50 hover:text-orange-500 hover:border-orange-200 transition shadow-sm",
                    "View More Sandbar Essentials \u{2192}"
                }
            }
        }
    }
}
