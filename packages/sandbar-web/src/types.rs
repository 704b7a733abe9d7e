//! Normalized display records
//!
//! These are the explicit normalization targets for the content API. Only the
//! `wp` adapter knows the source API's shape; everything else consumes these.

use serde::{Deserialize, Serialize};

/// A bookable boat excursion, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripListing {
    pub id: u64,
    /// Plain text; HTML entities from the source are already decoded.
    pub title: String,
    /// Decimal-as-text, defaulted to "0".
    pub price: String,
    /// Free-text unit label, e.g. "person".
    pub price_type: String,
    pub duration: String,
    /// Vibe slugs in encounter order. Duplicates are preserved as received.
    pub tags: Vec<String>,
    pub image: String,
    pub description: String,
    /// Falls back to `description`, so it is never empty when `description`
    /// is non-empty.
    pub long_description: String,
    pub affiliate_link: String,
}

impl TripListing {
    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|t| t == slug)
    }
}

/// An affiliate product recommendation, unrelated to any specific trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssentialItem {
    pub id: u64,
    /// Plain text; HTML entities from the source are already decoded.
    pub name: String,
    /// Free text, may be empty.
    pub price: String,
    pub link: String,
    pub img: String,
}

/// Display form of a vibe slug: underscores become spaces.
pub fn display_tag(slug: &str) -> String {
    slug.replace('_', " ")
}
