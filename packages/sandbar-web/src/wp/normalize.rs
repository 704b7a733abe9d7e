//! Raw WordPress posts → flat display records
//!
//! Every optional custom field has a named literal fallback, and empty
//! strings count as missing. Rendered titles are decoded to plain text here,
//! so rendering never has to trust markup from the content source.

use crate::config::{ESSENTIAL_IMAGE_FALLBACK, TRIP_IMAGE_FALLBACK};
use crate::types::{EssentialItem, TripListing};

use super::types::{Embedded, WpEssential, WpTrip};

/// Taxonomy whose terms classify a trip's vibe.
const VIBE_TAXONOMY: &str = "trip_vibe";

pub fn trip_from_wp(raw: WpTrip) -> TripListing {
    let acf = raw.acf.unwrap_or_default();
    let tags = vibe_slugs(raw.embedded.as_ref());
    let image = featured_image(raw.embedded.as_ref(), TRIP_IMAGE_FALLBACK);

    let description = field(acf.short_description.as_deref(), "No description available.");
    let long_description = field(acf.long_description.as_deref(), &description);

    TripListing {
        id: raw.id,
        title: decode_title(&raw.title.rendered),
        price: field(acf.price.as_deref(), "0"),
        price_type: field(acf.price_type.as_deref(), ""),
        duration: field(acf.duration.as_deref(), ""),
        tags,
        image,
        description,
        long_description,
        affiliate_link: field(acf.affiliate_link.as_deref(), "#"),
    }
}

pub fn essential_from_wp(raw: WpEssential) -> EssentialItem {
    let acf = raw.acf.unwrap_or_default();
    let img = featured_image(raw.embedded.as_ref(), ESSENTIAL_IMAGE_FALLBACK);

    EssentialItem {
        id: raw.id,
        name: decode_title(&raw.title.rendered),
        price: field(acf.price.as_deref(), ""),
        link: field(acf.affiliate_link.as_deref(), "#"),
        img,
    }
}

/// Slugs of embedded terms in the vibe taxonomy, in encounter order.
/// Duplicates are preserved as received.
fn vibe_slugs(embedded: Option<&Embedded>) -> Vec<String> {
    let mut tags = Vec::new();
    if let Some(embedded) = embedded {
        for term_list in &embedded.terms {
            for term in term_list {
                if term.taxonomy == VIBE_TAXONOMY {
                    tags.push(term.slug.clone());
                }
            }
        }
    }
    tags
}

/// First embedded media item's source URL, else the fixed fallback.
fn featured_image(embedded: Option<&Embedded>, fallback: &str) -> String {
    embedded
        .and_then(|e| e.featured_media.first())
        .and_then(|m| m.source_url.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Absent or empty fields take the named fallback.
fn field(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// WP renders titles with HTML entities (`&amp;`, `&#8217;`, ...); decode
/// them so titles can be rendered as plain text.
fn decode_title(rendered: &str) -> String {
    html_escape::decode_html_entities(rendered).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trip_from_json(value: serde_json::Value) -> TripListing {
        trip_from_wp(serde_json::from_value(value).expect("valid trip json"))
    }

    #[test]
    fn test_full_trip_is_flattened() {
        let trip = trip_from_json(json!({
            "id": 42,
            "title": { "rendered": "Reef &amp; Relax" },
            "acf": {
                "price": "199",
                "price_type": "person",
                "duration": "4 hours",
                "short_description": "Short.",
                "long_description": "Long.",
                "affiliate_link": "https://example.com/book"
            },
            "_embedded": {
                "wp:term": [
                    [
                        { "taxonomy": "trip_vibe", "slug": "luxury" },
                        { "taxonomy": "category", "slug": "uncategorized" }
                    ],
                    [
                        { "taxonomy": "trip_vibe", "slug": "sunset" }
                    ]
                ],
                "wp:featuredmedia": [
                    { "source_url": "https://example.com/boat.jpg" }
                ]
            }
        }));

        assert_eq!(trip.id, 42);
        assert_eq!(trip.title, "Reef & Relax");
        assert_eq!(trip.price, "199");
        assert_eq!(trip.price_type, "person");
        assert_eq!(trip.duration, "4 hours");
        assert_eq!(trip.tags, vec!["luxury", "sunset"]);
        assert_eq!(trip.image, "https://example.com/boat.jpg");
        assert_eq!(trip.description, "Short.");
        assert_eq!(trip.long_description, "Long.");
        assert_eq!(trip.affiliate_link, "https://example.com/book");
    }

    #[test]
    fn test_bare_trip_takes_every_fallback() {
        let trip = trip_from_json(json!({
            "id": 7,
            "title": { "rendered": "Bare Bones" }
        }));

        assert_eq!(trip.price, "0");
        assert_eq!(trip.price_type, "");
        assert_eq!(trip.duration, "");
        assert!(trip.tags.is_empty());
        assert_eq!(trip.image, TRIP_IMAGE_FALLBACK);
        assert_eq!(trip.description, "No description available.");
        assert_eq!(trip.long_description, "No description available.");
        assert_eq!(trip.affiliate_link, "#");
    }

    #[test]
    fn test_empty_fields_count_as_missing() {
        let trip = trip_from_json(json!({
            "id": 7,
            "title": { "rendered": "Empty Fields" },
            "acf": {
                "price": "",
                "short_description": "",
                "affiliate_link": ""
            }
        }));

        assert_eq!(trip.price, "0");
        assert_eq!(trip.description, "No description available.");
        assert_eq!(trip.affiliate_link, "#");
    }

    #[test]
    fn test_long_description_falls_back_to_description() {
        let trip = trip_from_json(json!({
            "id": 9,
            "title": { "rendered": "One Liner" },
            "acf": { "short_description": "Just the short one." }
        }));

        assert_eq!(trip.long_description, "Just the short one.");
        // Fallback invariant: never empty when description is non-empty
        assert!(!trip.long_description.is_empty());
    }

    #[test]
    fn test_only_vibe_terms_become_tags() {
        let trip = trip_from_json(json!({
            "id": 1,
            "title": { "rendered": "Tagged" },
            "_embedded": {
                "wp:term": [
                    [
                        { "taxonomy": "category", "slug": "news" },
                        { "taxonomy": "trip_vibe", "slug": "eco" }
                    ]
                ]
            }
        }));

        assert_eq!(trip.tags, vec!["eco"]);
        assert_eq!(trip.image, TRIP_IMAGE_FALLBACK);
    }

    #[test]
    fn test_duplicate_vibes_are_preserved() {
        let trip = trip_from_json(json!({
            "id": 1,
            "title": { "rendered": "Twice" },
            "_embedded": {
                "wp:term": [
                    [ { "taxonomy": "trip_vibe", "slug": "eco" } ],
                    [ { "taxonomy": "trip_vibe", "slug": "eco" } ]
                ]
            }
        }));

        assert_eq!(trip.tags, vec!["eco", "eco"]);
    }

    #[test]
    fn test_media_without_source_url_falls_back() {
        let trip = trip_from_json(json!({
            "id": 3,
            "title": { "rendered": "No Photo" },
            "_embedded": { "wp:featuredmedia": [ {} ] }
        }));

        assert_eq!(trip.image, TRIP_IMAGE_FALLBACK);
    }

    #[test]
    fn test_essential_is_flattened() {
        let raw: WpEssential = serde_json::from_value(json!({
            "id": 11,
            "title": { "rendered": "Reef-Safe Sunscreen &#8211; SPF 50" },
            "acf": { "price": "$18.99", "affiliate_link": "https://amzn.to/abc" },
            "_embedded": {
                "wp:featuredmedia": [ { "source_url": "https://example.com/spf.jpg" } ]
            }
        }))
        .expect("valid essential json");

        let item = essential_from_wp(raw);
        assert_eq!(item.id, 11);
        assert_eq!(item.name, "Reef-Safe Sunscreen \u{2013} SPF 50");
        assert_eq!(item.price, "$18.99");
        assert_eq!(item.link, "https://amzn.to/abc");
        assert_eq!(item.img, "https://example.com/spf.jpg");
    }

    #[test]
    fn test_essential_fallbacks() {
        let raw: WpEssential = serde_json::from_value(json!({
            "id": 12,
            "title": { "rendered": "Dry Bag" }
        }))
        .expect("valid essential json");

        let item = essential_from_wp(raw);
        assert_eq!(item.price, "");
        assert_eq!(item.link, "#");
        assert_eq!(item.img, ESSENTIAL_IMAGE_FALLBACK);
    }
}
