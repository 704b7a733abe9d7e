//! Fixed application configuration: endpoints, page caps, vibe categories,
//! defaulting fallbacks, and the favorites storage key.

/// Default base URL of the WordPress content API. Overridable with the
/// `CONTENT_API_URL` environment variable on the server.
pub const DEFAULT_API_BASE: &str = "https://cruisytravel.com/wp-json/wp/v2";

/// Main marketing site linked from the home page.
pub const MAIN_SITE_URL: &str = "https://cruisytravel.com/key-west/";

/// Amazon storefront linked from the essentials section.
pub const STOREFRONT_URL: &str = "https://amzn.to/4qswW40";

/// Page cap for the trip collection. Items beyond the cap are never
/// retrieved; there is no pagination.
pub const TRIPS_PER_PAGE: u32 = 100;

/// Page cap for the essentials collection.
pub const ESSENTIALS_PER_PAGE: u32 = 6;

/// Fallback hero image for trips without featured media.
pub const TRIP_IMAGE_FALLBACK: &str =
    "https://images.unsplash.com/photo-1559128010-7c1ad6e1b6a5?auto=format&fit=crop&q=80&w=800";

/// Fallback thumbnail for essentials without featured media.
pub const ESSENTIAL_IMAGE_FALLBACK: &str = "https://via.placeholder.com/150";

/// localStorage key holding the JSON-serialized list of saved trip ids.
pub const SAVED_TRIPS_STORAGE_KEY: &str = "sandbar_saved_trips";

/// Fixed user-facing message shown when the trip fetch fails.
pub const TRIPS_ERROR_MESSAGE: &str = "Could not load trips. Please try again later.";

/// A filterable trip vibe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    /// Slug, must match the `trip_vibe` taxonomy slugs on the content API.
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The eight fixed vibe categories shown in the filter panel.
pub const CATEGORIES: &[Category] = &[
    Category { id: "private", label: "Private Charter", icon: "\u{1F6E5}\u{FE0F}" },
    Category { id: "group", label: "Social / Group", icon: "\u{1F389}" },
    Category { id: "rental", label: "Drive Yourself", icon: "\u{1F697}" },
    Category { id: "sunset", label: "Sunset Sandbar", icon: "\u{1F305}" },
    Category { id: "clothing_optional", label: "Clothing Optional", icon: "\u{1F459}" },
    Category { id: "eco", label: "Eco / Kayak", icon: "\u{1F6F6}" },
    Category { id: "dog_friendly", label: "Dog Friendly", icon: "\u{1F43E}" },
    Category { id: "luxury", label: "Luxury", icon: "\u{1F48E}" },
];
