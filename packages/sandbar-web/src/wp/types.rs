//! Raw WordPress REST response shapes
//!
//! Deserialization targets for the `sandbar_trip` and `amazon_essential`
//! custom post type endpoints, queried with `_embed`.

use serde::Deserialize;

/// A rendered-markup text wrapper, e.g. `{"rendered": "Boat &amp; Bubbles"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

/// Raw trip post.
#[derive(Debug, Clone, Deserialize)]
pub struct WpTrip {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub acf: Option<TripFields>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

/// Optional custom-fields bag on a trip post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripFields {
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_type: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
}

/// Raw essential post.
#[derive(Debug, Clone, Deserialize)]
pub struct WpEssential {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub acf: Option<EssentialFields>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<Embedded>,
}

/// Optional custom-fields bag on an essential post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EssentialFields {
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub affiliate_link: Option<String>,
}

/// Embedded related resources requested with `_embed`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    /// One inner list per taxonomy attached to the post.
    #[serde(rename = "wp:term", default)]
    pub terms: Vec<Vec<Term>>,
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Vec<Media>,
}

/// An embedded taxonomy term.
#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub taxonomy: String,
    #[serde(default)]
    pub slug: String,
}

/// An embedded media item.
#[derive(Debug, Clone, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub source_url: Option<String>,
}
