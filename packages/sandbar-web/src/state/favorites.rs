//! Saved-trips set, persisted across sessions

use dioxus::prelude::*;

use crate::config::SAVED_TRIPS_STORAGE_KEY;
use crate::types::TripListing;

use super::storage::{BrowserStorage, KeyValueStore};
use super::toggle_membership;

/// The user's shortlist of trip ids, in save order, backed by a key-value
/// store. Every mutation is written through synchronously.
pub struct SavedTrips<S: KeyValueStore> {
    ids: Vec<u64>,
    store: S,
}

impl<S: KeyValueStore> SavedTrips<S> {
    /// Load the persisted set, or start empty when the key is absent or the
    /// stored value does not parse.
    pub fn load(store: S) -> Self {
        let ids = store
            .get(SAVED_TRIPS_STORAGE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { ids, store }
    }

    /// Add the id if absent, remove it if present, and persist.
    pub fn toggle(&mut self, id: u64) {
        toggle_membership(&mut self.ids, id);
        self.persist();
    }

    pub fn is_saved(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Project the saved ids against the loaded trips, preserving save order.
    /// Ids with no matching trip are skipped; the stored set is not pruned.
    pub fn resolve(&self, trips: &[TripListing]) -> Vec<TripListing> {
        self.ids
            .iter()
            .filter_map(|id| trips.iter().find(|t| t.id == *id).cloned())
            .collect()
    }

    fn persist(&self) {
        match serde_json::to_string(&self.ids) {
            Ok(raw) => self.store.set(SAVED_TRIPS_STORAGE_KEY, &raw),
            Err(err) => tracing::error!("failed to serialize saved trips: {err}"),
        }
    }
}

/// Favorites context that provides the saved set to the entire app
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    saved: Signal<SavedTrips<BrowserStorage>>,
}

impl FavoritesContext {
    pub fn toggle(mut self, id: u64) {
        self.saved.write().toggle(id);
    }

    pub fn is_saved(&self, id: u64) -> bool {
        self.saved.read().is_saved(id)
    }

    pub fn count(&self) -> usize {
        self.saved.read().len()
    }

    pub fn resolve(&self, trips: &[TripListing]) -> Vec<TripListing> {
        self.saved.read().resolve(trips)
    }
}

/// Favorites provider component that wraps the app
#[component]
pub fn FavoritesProvider(children: Element) -> Element {
    let mut saved = use_signal(|| SavedTrips::load(BrowserStorage));

    use_context_provider(|| FavoritesContext { saved });

    // Hydrate from localStorage once the client is mounted; the server render
    // always starts empty.
    use_effect(move || {
        saved.set(SavedTrips::load(BrowserStorage));
    });

    children
}

/// Hook to access the favorites context
pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStore;

    fn trip(id: u64) -> TripListing {
        TripListing {
            id,
            title: format!("Trip {id}"),
            price: "0".to_string(),
            price_type: String::new(),
            duration: String::new(),
            tags: vec![],
            image: String::new(),
            description: String::new(),
            long_description: String::new(),
            affiliate_link: "#".to_string(),
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let store = MemoryStore::default();
        let mut saved = SavedTrips::load(&store);

        assert!(!saved.is_saved(1));
        saved.toggle(1);
        assert!(saved.is_saved(1));
        saved.toggle(1);
        assert!(!saved.is_saved(1));
    }

    #[test]
    fn test_each_toggle_persists_exactly_once() {
        let store = MemoryStore::default();
        let mut saved = SavedTrips::load(&store);

        saved.toggle(1);
        saved.toggle(2);
        saved.toggle(1);

        assert_eq!(store.writes(), 3);
        assert_eq!(
            store.get(SAVED_TRIPS_STORAGE_KEY).as_deref(),
            Some("[2]"),
            "storage reflects the final state"
        );
    }

    #[test]
    fn test_round_trip_preserves_save_order() {
        let store = MemoryStore::default();
        let mut saved = SavedTrips::load(&store);
        saved.toggle(3);
        saved.toggle(1);
        saved.toggle(2);

        let reloaded = SavedTrips::load(&store);
        assert_eq!(reloaded.ids(), &[3, 1, 2]);
    }

    #[test]
    fn test_malformed_persisted_value_loads_as_empty() {
        let store = MemoryStore::seed(SAVED_TRIPS_STORAGE_KEY, "not json");
        let saved = SavedTrips::load(&store);
        assert!(saved.is_empty());
    }

    #[test]
    fn test_resolve_follows_save_order() {
        let store = MemoryStore::default();
        let mut saved = SavedTrips::load(&store);
        saved.toggle(2);
        saved.toggle(1);

        let trips = vec![trip(1), trip(2)];
        let resolved = saved.resolve(&trips);
        let ids: Vec<u64> = resolved.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_resolve_drops_orphans_without_pruning() {
        let store = MemoryStore::seed(SAVED_TRIPS_STORAGE_KEY, "[5,1]");
        let saved = SavedTrips::load(&store);

        let trips = vec![trip(1)];
        let resolved = saved.resolve(&trips);
        let ids: Vec<u64> = resolved.iter().map(|t| t.id).collect();

        assert_eq!(ids, vec![1], "orphaned id 5 is excluded from display");
        assert_eq!(saved.ids(), &[5, 1], "the stored set keeps the stale id");
        assert_eq!(store.writes(), 0, "resolving never writes");
    }
}
