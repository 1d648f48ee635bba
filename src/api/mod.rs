//! API clients for external media services
//!
//! - Unsplash: photo search
//! - Pexels: photo and video search
//! - Pixabay: image and video search
//!
//! Every client's `search` is capability-checked: a missing required
//! credential yields [`Fetched::Placeholder`](crate::models::Fetched)
//! without touching the network, a successful call yields
//! [`Fetched::Live`](crate::models::Fetched), and anything that went wrong
//! on the wire is an [`ApiError`].

pub mod pexels;
pub mod pixabay;
pub mod unsplash;

pub use pexels::PexelsClient;
pub use pixabay::PixabayClient;
pub use unsplash::UnsplashClient;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Media API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Send a prepared GET and parse the JSON body
pub(crate) async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ApiError> {
    let response = request
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ApiError::InvalidResponse(format!("JSON parse error: {}", e)))
}
