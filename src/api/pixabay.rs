//! Pixabay API client
//!
//! Image and video search. The key travels as a query parameter and is
//! optional here: without one the request is still sent, and whatever the
//! API answers is handled like any other response.
//! API docs: https://pixabay.com/api/docs/

use tracing::debug;

use super::{get_json, ApiError};
use crate::models::{Fetched, PixabayImageSearch, PixabayVideoSearch, Provider};

/// Pixabay API client
pub struct PixabayClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl PixabayClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, Provider::Pixabay.base_url())
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Search images
    pub async fn search_images(
        &self,
        query: &str,
        count: u32,
    ) -> Result<Fetched<PixabayImageSearch>, ApiError> {
        let request = self.request("/", query, count);
        get_json(request).await.map(Fetched::Live)
    }

    /// Search videos
    pub async fn search_videos(
        &self,
        query: &str,
        count: u32,
    ) -> Result<Fetched<PixabayVideoSearch>, ApiError> {
        let request = self.request("/videos/", query, count);
        get_json(request).await.map(Fetched::Live)
    }

    fn request(&self, endpoint: &str, query: &str, count: u32) -> reqwest::RequestBuilder {
        let per_page = Provider::Pixabay.clamp_count(count).to_string();
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, query, %per_page, "Pixabay search");

        let mut params = vec![("q", query), ("per_page", per_page.as_str())];
        if let Some(key) = self.api_key.as_deref() {
            params.push(("key", key));
        }
        self.client.get(url).query(&params)
    }
}
