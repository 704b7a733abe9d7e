//! Loaded content context
//!
//! Issues the two collection fetches once at startup. The requests are
//! independent: the essentials fetch failing only leaves that list empty,
//! while a trips failure puts the whole view into the error state. The app
//! counts as loading until both requests have settled.

use dioxus::prelude::*;
use tracing::{error, warn};

use crate::config::TRIPS_ERROR_MESSAGE;
use crate::types::{EssentialItem, TripListing};

/// Content context that provides the loaded collections to the entire app
#[derive(Clone, Copy)]
pub struct ContentContext {
    pub trips: Signal<Vec<TripListing>>,
    pub essentials: Signal<Vec<EssentialItem>>,
    /// Fixed user-facing message, set only on a fatal trips failure.
    pub error: Signal<Option<String>>,
    trips_settled: Signal<bool>,
    essentials_settled: Signal<bool>,
}

impl ContentContext {
    /// True until both startup requests have settled, successfully or not.
    pub fn is_loading(&self) -> bool {
        !(*self.trips_settled.read() && *self.essentials_settled.read())
    }
}

/// Content provider component that wraps the app and starts the fetches
#[component]
pub fn ContentProvider(children: Element) -> Element {
    let mut trips = use_signal(Vec::new);
    let mut essentials = use_signal(Vec::new);
    let mut error = use_signal(|| None::<String>);
    let mut trips_settled = use_signal(|| false);
    let mut essentials_settled = use_signal(|| false);

    use_context_provider(|| ContentContext {
        trips,
        essentials,
        error,
        trips_settled,
        essentials_settled,
    });

    // Issue both requests together; each settles on its own, in either order.
    // Nothing is retried and there is no timeout.
    use_effect(move || {
        spawn(async move {
            match fetch_trips().await {
                Ok(list) => trips.set(list),
                Err(err) => {
                    error!("failed to fetch trips: {err}");
                    error.set(Some(TRIPS_ERROR_MESSAGE.to_string()));
                }
            }
            trips_settled.set(true);
        });

        spawn(async move {
            match fetch_essentials().await {
                Ok(list) => essentials.set(list),
                // Tolerated: the essentials panel simply stays empty
                Err(err) => warn!("failed to fetch essentials: {err}"),
            }
            essentials_settled.set(true);
        });
    });

    children
}

/// Hook to access the content context
pub fn use_content() -> ContentContext {
    use_context::<ContentContext>()
}

/// Server function to fetch the trip collection
#[server]
async fn fetch_trips() -> Result<Vec<TripListing>, ServerFnError> {
    let client = crate::wp::server_client();
    client
        .trips()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Server function to fetch the essentials collection
#[server]
async fn fetch_essentials() -> Result<Vec<EssentialItem>, ServerFnError> {
    let client = crate::wp::server_client();
    client
        .essentials()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
