//! Stock media search across providers
//!
//! `StockMedia` owns one client per provider and turns their
//! capability-checked results into a `SearchOutcome`. A failed call is
//! logged and replaced with the provider's sample data, so callers always
//! get usable results; `Origin` records which path produced them.

use tracing::warn;

use crate::api::{ApiError, PexelsClient, PixabayClient, UnsplashClient};
use crate::config::Config;
use crate::models::{
    Fetched, MediaKind, Origin, PexelsPhotoSearch, Provider, SearchOutcome, SearchResults,
    UnsplashSearch,
};
use crate::placeholder;

/// Search front-end over all providers
pub struct StockMedia {
    unsplash: UnsplashClient,
    pexels: PexelsClient,
    pixabay: PixabayClient,
}

impl StockMedia {
    /// Build clients from the configured credentials
    pub fn new(config: &Config) -> Self {
        Self {
            unsplash: UnsplashClient::new(owned_credential(config, Provider::Unsplash)),
            pexels: PexelsClient::new(owned_credential(config, Provider::Pexels)),
            pixabay: PixabayClient::new(owned_credential(config, Provider::Pixabay)),
        }
    }

    /// Assemble from prebuilt clients (for testing)
    pub fn with_clients(
        unsplash: UnsplashClient,
        pexels: PexelsClient,
        pixabay: PixabayClient,
    ) -> Self {
        Self {
            unsplash,
            pexels,
            pixabay,
        }
    }

    /// Search one provider. Never fails, and never returns more than `count`
    /// items even when the provider's minimum page size is larger.
    pub async fn search(
        &self,
        provider: Provider,
        query: &str,
        count: u32,
        kind: MediaKind,
    ) -> SearchOutcome {
        let mut outcome = self.search_uncapped(provider, query, count, kind).await;
        outcome.results.truncate(count as usize);
        outcome
    }

    async fn search_uncapped(
        &self,
        provider: Provider,
        query: &str,
        count: u32,
        kind: MediaKind,
    ) -> SearchOutcome {
        match (provider, kind) {
            (Provider::Unsplash, MediaKind::Videos) => {
                warn!("Unsplash has no video search, searching photos instead");
                self.unsplash_outcome(query, count).await
            }
            (Provider::Unsplash, MediaKind::Photos) => self.unsplash_outcome(query, count).await,
            (Provider::Pexels, MediaKind::Photos) => {
                let fetched = self.pexels.search_photos(query, count).await;
                settle(provider, fetched, || placeholder::pexels_photos(query, count))
                    .map_results(SearchResults::PexelsPhotos)
            }
            (Provider::Pexels, MediaKind::Videos) => {
                let fetched = self.pexels.search_videos(query, count).await;
                settle(provider, fetched, placeholder::pexels_videos)
                    .map_results(SearchResults::PexelsVideos)
            }
            (Provider::Pixabay, MediaKind::Photos) => {
                let fetched = self.pixabay.search_images(query, count).await;
                settle(provider, fetched, || placeholder::pixabay_images(query, count))
                    .map_results(SearchResults::PixabayImages)
            }
            (Provider::Pixabay, MediaKind::Videos) => {
                let fetched = self.pixabay.search_videos(query, count).await;
                settle(provider, fetched, placeholder::pixabay_videos)
                    .map_results(SearchResults::PixabayVideos)
            }
        }
    }

    /// Unsplash photo search with fallback
    pub async fn search_unsplash(&self, query: &str, count: u32) -> (Origin, UnsplashSearch) {
        let fetched = self.unsplash.search(query, count).await;
        let settled = settle(Provider::Unsplash, fetched, || placeholder::unsplash(query, count));
        (settled.origin, settled.data)
    }

    /// Pexels photo search with fallback
    pub async fn search_pexels_photos(&self, query: &str, count: u32) -> (Origin, PexelsPhotoSearch) {
        let fetched = self.pexels.search_photos(query, count).await;
        let settled = settle(Provider::Pexels, fetched, || {
            placeholder::pexels_photos(query, count)
        });
        (settled.origin, settled.data)
    }

    async fn unsplash_outcome(&self, query: &str, count: u32) -> SearchOutcome {
        let (origin, data) = self.search_unsplash(query, count).await;
        SearchOutcome {
            origin,
            results: SearchResults::Unsplash(data),
        }
    }
}

fn owned_credential(config: &Config, provider: Provider) -> Option<String> {
    config.credential(provider).map(str::to_string)
}

struct Settled<T> {
    origin: Origin,
    data: T,
}

impl<T> Settled<T> {
    fn map_results(self, f: impl FnOnce(T) -> SearchResults) -> SearchOutcome {
        SearchOutcome {
            origin: self.origin,
            results: f(self.data),
        }
    }
}

/// Resolve a client result, substituting sample data on error
fn settle<T>(
    provider: Provider,
    fetched: Result<Fetched<T>, ApiError>,
    sample: impl FnOnce() -> T,
) -> Settled<T> {
    match fetched {
        Ok(fetched) => {
            let origin = if fetched.is_live() {
                Origin::Live
            } else {
                warn!("No {} API key found. Using sample data.", provider);
                Origin::MissingCredential
            };
            Settled {
                origin,
                data: fetched.into_inner(),
            }
        }
        Err(e) => {
            warn!("Error fetching from {}: {}", provider, e);
            Settled {
                origin: Origin::Fallback,
                data: sample(),
            }
        }
    }
}
