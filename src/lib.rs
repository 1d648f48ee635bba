//! site-media - media helpers for a static academic website
//!
//! Two small tools share this library:
//!
//! - `youtube-thumbnails` fetches a thumbnail for every video or talk
//!   referenced from the bibliography
//! - `stock-media` searches Unsplash, Pexels and Pixabay, downloads results
//!   and curates suggestions for the site's research topics
//!
//! # Modules
//!
//! - `models` - Provider identity, typed API responses, curated records
//! - `api` - Provider clients
//! - `placeholder` - Sample data used when a provider can't be queried
//! - `stock` - Provider search with fallback
//! - `download` - Streaming downloads into the asset tree
//! - `curate` - Research topic curation
//! - `bibliography` / `thumbnails` - Bibliography thumbnail fetcher

pub mod api;
pub mod bibliography;
pub mod cli;
pub mod commands;
pub mod config;
pub mod curate;
pub mod download;
pub mod logging;
pub mod models;
pub mod placeholder;
pub mod stock;
pub mod thumbnails;

// Re-export commonly used types
pub use models::{
    CuratedImage, CuratedMedia, CuratedTopic, Fetched, MediaKind, Origin, Provider,
    SearchOutcome, SearchResults,
};

pub use api::{ApiError, PexelsClient, PixabayClient, UnsplashClient};
pub use config::{Config, SiteLayout};
pub use download::Downloader;
pub use stock::StockMedia;
pub use thumbnails::ThumbnailFetcher;
