//! Vibe filter: pure evaluator plus the app-level selection context

use dioxus::prelude::*;

use crate::types::TripListing;

use super::toggle_membership;

/// Derive the visible subset of trips for the selected vibe slugs.
///
/// An empty selection shows everything. Otherwise a trip is visible when at
/// least one of its tags is selected (OR across categories). Plain scan, no
/// index; the collection is at most a hundred trips.
pub fn filter_trips(trips: &[TripListing], selected: &[String]) -> Vec<TripListing> {
    if selected.is_empty() {
        return trips.to_vec();
    }
    trips
        .iter()
        .filter(|trip| trip.tags.iter().any(|tag| selected.contains(tag)))
        .cloned()
        .collect()
}

/// Filter context holding the active selection, in selection (append) order.
/// Lives above the router so the selection survives Home/Saved navigation.
#[derive(Clone, Copy)]
pub struct FilterContext {
    pub selected: Signal<Vec<String>>,
}

impl FilterContext {
    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected.read().iter().any(|s| s == slug)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.read().is_empty()
    }

    /// Selecting an already-selected vibe deselects it; a new one is appended.
    pub fn toggle(mut self, slug: &str) {
        toggle_membership(&mut self.selected.write(), slug.to_string());
    }

    pub fn clear(mut self) {
        self.selected.set(Vec::new());
    }

    pub fn apply(&self, trips: &[TripListing]) -> Vec<TripListing> {
        filter_trips(trips, &self.selected.read())
    }
}

/// Filter provider component that wraps the app
#[component]
pub fn FilterProvider(children: Element) -> Element {
    let selected = use_signal(Vec::new);
    use_context_provider(|| FilterContext { selected });
    children
}

/// Hook to access the filter context
pub fn use_filter() -> FilterContext {
    use_context::<FilterContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: u64, tags: &[&str]) -> TripListing {
        TripListing {
            id,
            title: format!("Trip {id}"),
            price: "0".to_string(),
            price_type: String::new(),
            duration: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            description: String::new(),
            long_description: String::new(),
            affiliate_link: "#".to_string(),
        }
    }

    fn slugs(slugs: &[&str]) -> Vec<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    fn ids(trips: &[TripListing]) -> Vec<u64> {
        trips.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_empty_selection_shows_everything() {
        let trips = vec![trip(1, &["luxury"]), trip(2, &["group"])];
        let visible = filter_trips(&trips, &[]);
        assert_eq!(visible, trips);
    }

    #[test]
    fn test_single_vibe_matches_tagged_trips() {
        let trips = vec![
            trip(1, &["luxury", "sunset"]),
            trip(2, &["group"]),
            trip(3, &["luxury"]),
        ];
        let visible = filter_trips(&trips, &slugs(&["luxury"]));
        assert_eq!(ids(&visible), vec![1, 3]);
    }

    #[test]
    fn test_multiple_vibes_union() {
        let trips = vec![
            trip(1, &["luxury"]),
            trip(2, &["eco"]),
            trip(3, &["group"]),
            trip(4, &["eco", "luxury"]),
        ];
        let visible = filter_trips(&trips, &slugs(&["luxury", "eco"]));
        assert_eq!(ids(&visible), vec![1, 2, 4]);
    }

    #[test]
    fn test_unmatched_selection_is_empty() {
        let trips = vec![trip(1, &["group"])];
        let visible = filter_trips(&trips, &slugs(&["luxury"]));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_sunset_selection_matches_single_trip() {
        let trips = vec![trip(1, &["luxury", "sunset"]), trip(2, &["group"])];
        let visible = filter_trips(&trips, &slugs(&["sunset"]));
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_toggle_membership_appends_then_removes() {
        let mut selected = Vec::new();
        toggle_membership(&mut selected, "eco".to_string());
        toggle_membership(&mut selected, "luxury".to_string());
        assert_eq!(selected, slugs(&["eco", "luxury"]));

        toggle_membership(&mut selected, "eco".to_string());
        assert_eq!(selected, slugs(&["luxury"]));
    }
}
