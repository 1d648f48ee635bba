//! Pexels API client
//!
//! Photo and video search. API docs: https://www.pexels.com/api/documentation/

use tracing::debug;

use super::{get_json, ApiError};
use crate::models::{Fetched, PexelsPhotoSearch, PexelsVideoSearch, Provider};
use crate::placeholder;

/// Pexels API client
pub struct PexelsClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl PexelsClient {
    /// Create a new Pexels client. `None` means sample data only.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, Provider::Pexels.base_url())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Search photos
    pub async fn search_photos(
        &self,
        query: &str,
        count: u32,
    ) -> Result<Fetched<PexelsPhotoSearch>, ApiError> {
        let Some(key) = self.api_key.as_deref() else {
            return Ok(Fetched::Placeholder(placeholder::pexels_photos(query, count)));
        };
        let request = self.request("/v1/search", key, query, count);
        get_json(request).await.map(Fetched::Live)
    }

    /// Search videos
    pub async fn search_videos(
        &self,
        query: &str,
        count: u32,
    ) -> Result<Fetched<PexelsVideoSearch>, ApiError> {
        let Some(key) = self.api_key.as_deref() else {
            return Ok(Fetched::Placeholder(placeholder::pexels_videos()));
        };
        let request = self.request("/videos/search", key, query, count);
        get_json(request).await.map(Fetched::Live)
    }

    fn request(&self, endpoint: &str, key: &str, query: &str, count: u32) -> reqwest::RequestBuilder {
        let per_page = Provider::Pexels.clamp_count(count).to_string();
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, query, %per_page, "Pexels search");

        // Pexels takes the bare key, no scheme prefix
        self.client
            .get(url)
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .header("Authorization", key)
    }
}
