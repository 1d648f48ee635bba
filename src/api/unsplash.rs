//! Unsplash API client
//!
//! Photo search only. API docs: https://unsplash.com/documentation#search-photos

use tracing::debug;

use super::{get_json, ApiError};
use crate::models::{Fetched, Provider, UnsplashSearch};
use crate::placeholder;

/// Orientation requested when the caller doesn't pick one
pub const DEFAULT_ORIENTATION: &str = "landscape";

/// Unsplash API client
pub struct UnsplashClient {
    access_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl UnsplashClient {
    /// Create a new Unsplash client. `None` means sample data only.
    pub fn new(access_key: Option<String>) -> Self {
        Self::with_base_url(access_key, Provider::Unsplash.base_url())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(access_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_key,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Search landscape photos
    pub async fn search(&self, query: &str, count: u32) -> Result<Fetched<UnsplashSearch>, ApiError> {
        self.search_oriented(query, count, DEFAULT_ORIENTATION).await
    }

    /// Search photos with an explicit orientation (landscape, portrait, squarish)
    pub async fn search_oriented(
        &self,
        query: &str,
        count: u32,
        orientation: &str,
    ) -> Result<Fetched<UnsplashSearch>, ApiError> {
        let Some(key) = self.access_key.as_deref() else {
            return Ok(Fetched::Placeholder(placeholder::unsplash(query, count)));
        };

        let per_page = Provider::Unsplash.clamp_count(count).to_string();
        let url = format!("{}/search/photos", self.base_url);
        debug!(%url, query, %per_page, "Unsplash search");

        let request = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", orientation),
            ])
            .header("Authorization", format!("Client-ID {}", key));

        get_json(request).await.map(Fetched::Live)
    }
}
