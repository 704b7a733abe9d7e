//! HTTP client for the content API

use crate::config::{ESSENTIALS_PER_PAGE, TRIPS_PER_PAGE};
use crate::types::{EssentialItem, TripListing};

use super::normalize::{essential_from_wp, trip_from_wp};
use super::types::{WpEssential, WpTrip};

/// Error type for content API operations
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the two read-only collection endpoints. Requests are issued
/// once per session with no retry, timeout, or caching.
#[derive(Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a new content client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch and normalize the trip collection (up to the fixed page cap).
    pub async fn trips(&self) -> Result<Vec<TripListing>, ContentError> {
        let raw: Vec<WpTrip> = self
            .get_embedded("sandbar_trip", TRIPS_PER_PAGE)
            .await?;
        Ok(raw.into_iter().map(trip_from_wp).collect())
    }

    /// Fetch and normalize the essentials collection (up to the fixed page cap).
    pub async fn essentials(&self) -> Result<Vec<EssentialItem>, ContentError> {
        let raw: Vec<WpEssential> = self
            .get_embedded("amazon_essential", ESSENTIALS_PER_PAGE)
            .await?;
        Ok(raw.into_iter().map(essential_from_wp).collect())
    }

    async fn get_embedded<R>(&self, collection: &str, per_page: u32) -> Result<Vec<R>, ContentError>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = format!(
            "{}/{}?_embed&per_page={}",
            self.base_url, collection, per_page
        );
        tracing::debug!(%url, "fetching content collection");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

/// Create a client for server-side requests (direct to the content API)
#[cfg(feature = "server")]
pub fn server_client() -> ContentClient {
    let url = std::env::var("CONTENT_API_URL")
        .unwrap_or_else(|_| crate::config::DEFAULT_API_BASE.to_string());
    ContentClient::new(url)
}
