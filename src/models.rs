//! Data structures and types for site-media
//!
//! Contains all shared models organized by domain:
//! - **Providers**: media provider identity, limits and media kinds
//! - **Unsplash / Pexels / Pixabay**: typed search responses, one per provider
//! - **Search**: the tagged result variant and where the data came from
//! - **Curation**: per-topic records written to `curated_media.json`

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// =============================================================================
// Provider Models
// =============================================================================

/// Stock media provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Unsplash,
    Pexels,
    Pixabay,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Unsplash, Provider::Pexels, Provider::Pixabay];

    /// Lowercase identifier used in filenames and curated records
    pub fn slug(self) -> &'static str {
        match self {
            Provider::Unsplash => "unsplash",
            Provider::Pexels => "pexels",
            Provider::Pixabay => "pixabay",
        }
    }

    /// Default API base URL
    pub fn base_url(self) -> &'static str {
        match self {
            Provider::Unsplash => "https://api.unsplash.com",
            Provider::Pexels => "https://api.pexels.com",
            Provider::Pixabay => "https://pixabay.com/api",
        }
    }

    /// Environment variable holding the credential
    pub fn env_var(self) -> &'static str {
        match self {
            Provider::Unsplash => "UNSPLASH_ACCESS_KEY",
            Provider::Pexels => "PEXELS_API_KEY",
            Provider::Pixabay => "PIXABAY_API_KEY",
        }
    }

    /// Largest page size the provider accepts
    pub fn max_per_page(self) -> u32 {
        match self {
            Provider::Unsplash => 30,
            Provider::Pexels => 80,
            Provider::Pixabay => 200,
        }
    }

    /// Smallest page size the provider accepts
    pub fn min_per_page(self) -> u32 {
        match self {
            Provider::Pixabay => 3,
            _ => 1,
        }
    }

    /// Clamp a requested count to the provider's page size limits
    pub fn clamp_count(self, count: u32) -> u32 {
        count.clamp(self.min_per_page(), self.max_per_page())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Unsplash => write!(f, "Unsplash"),
            Provider::Pexels => write!(f, "Pexels"),
            Provider::Pixabay => write!(f, "Pixabay"),
        }
    }
}

/// Kind of media to search for and where downloads land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Photos,
    Videos,
}

impl MediaKind {
    /// File extension used for downloads
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Photos => "jpg",
            MediaKind::Videos => "mp4",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photos => write!(f, "photos"),
            MediaKind::Videos => write!(f, "videos"),
        }
    }
}

// =============================================================================
// Unsplash Models
// =============================================================================

/// `GET /search/photos` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsplashSearch {
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsplashPhoto {
    #[serde(default)]
    pub urls: UnsplashUrls,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user: UnsplashUser,
    #[serde(default)]
    pub links: UnsplashLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsplashUrls {
    #[serde(default)]
    pub regular: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsplashUser {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnsplashLinks {
    #[serde(default)]
    pub download: String,
}

// =============================================================================
// Pexels Models
// =============================================================================

/// `GET /v1/search` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PexelsPhotoSearch {
    #[serde(default)]
    pub photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PexelsPhoto {
    #[serde(default)]
    pub src: PexelsSrc,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub photographer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PexelsSrc {
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub original: String,
}

/// `GET /videos/search` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PexelsVideoSearch {
    #[serde(default)]
    pub videos: Vec<PexelsVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PexelsVideo {
    #[serde(default)]
    pub video_files: Vec<PexelsVideoFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PexelsVideoFile {
    #[serde(default)]
    pub link: String,
}

// =============================================================================
// Pixabay Models
// =============================================================================

/// `GET /` (image search) response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixabayImageSearch {
    #[serde(default)]
    pub hits: Vec<PixabayImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixabayImage {
    #[serde(default, rename = "webformatURL")]
    pub webformat_url: String,
    #[serde(default, rename = "largeImageURL")]
    pub large_image_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub user: String,
}

/// `GET /videos/` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixabayVideoSearch {
    #[serde(default)]
    pub hits: Vec<PixabayVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixabayVideo {
    #[serde(default)]
    pub videos: PixabayVideoFiles,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub user: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixabayVideoFiles {
    #[serde(default)]
    pub medium: PixabayVideoFile,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PixabayVideoFile {
    #[serde(default)]
    pub url: String,
}

// =============================================================================
// Search Models
// =============================================================================

/// Outcome of a capability-checked client call
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// Data returned by the live API
    Live(T),
    /// Locally generated sample data (credential missing, no request made)
    Placeholder(T),
}

impl<T> Fetched<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Placeholder(data) => data,
        }
    }
}

/// Where a search result's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Live,
    MissingCredential,
    Fallback,
}

/// Search results, tagged by provider and media kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResults {
    Unsplash(UnsplashSearch),
    PexelsPhotos(PexelsPhotoSearch),
    PexelsVideos(PexelsVideoSearch),
    PixabayImages(PixabayImageSearch),
    PixabayVideos(PixabayVideoSearch),
}

impl SearchResults {
    pub fn provider(&self) -> Provider {
        match self {
            SearchResults::Unsplash(_) => Provider::Unsplash,
            SearchResults::PexelsPhotos(_) | SearchResults::PexelsVideos(_) => Provider::Pexels,
            SearchResults::PixabayImages(_) | SearchResults::PixabayVideos(_) => Provider::Pixabay,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            SearchResults::PexelsVideos(_) | SearchResults::PixabayVideos(_) => MediaKind::Videos,
            _ => MediaKind::Photos,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SearchResults::Unsplash(r) => r.results.len(),
            SearchResults::PexelsPhotos(r) => r.photos.len(),
            SearchResults::PexelsVideos(r) => r.videos.len(),
            SearchResults::PixabayImages(r) => r.hits.len(),
            SearchResults::PixabayVideos(r) => r.hits.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep at most `len` items
    pub fn truncate(&mut self, len: usize) {
        match self {
            SearchResults::Unsplash(r) => r.results.truncate(len),
            SearchResults::PexelsPhotos(r) => r.photos.truncate(len),
            SearchResults::PexelsVideos(r) => r.videos.truncate(len),
            SearchResults::PixabayImages(r) => r.hits.truncate(len),
            SearchResults::PixabayVideos(r) => r.hits.truncate(len),
        }
    }

    /// Downloadable URL of each item, in result order (empty when absent)
    pub fn media_urls(&self) -> Vec<String> {
        match self {
            SearchResults::Unsplash(r) => r.results.iter().map(|p| p.urls.regular.clone()).collect(),
            SearchResults::PexelsPhotos(r) => r.photos.iter().map(|p| p.src.large.clone()).collect(),
            SearchResults::PexelsVideos(r) => r
                .videos
                .iter()
                .map(|v| v.video_files.first().map(|f| f.link.clone()).unwrap_or_default())
                .collect(),
            SearchResults::PixabayImages(r) => r.hits.iter().map(|h| h.webformat_url.clone()).collect(),
            SearchResults::PixabayVideos(r) => {
                r.hits.iter().map(|h| h.videos.medium.url.clone()).collect()
            }
        }
    }
}

/// Search results plus the path that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub origin: Origin,
    pub results: SearchResults,
}

/// One file to fetch into the stock directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDownload {
    pub url: String,
    pub filename: String,
    pub kind: MediaKind,
}

impl MediaDownload {
    /// Build the download list for a search: `<provider>_<query>_<n>.<ext>`,
    /// skipping items without a URL.
    pub fn from_results(results: &SearchResults, query: &str) -> Vec<MediaDownload> {
        let kind = results.kind();
        let stem = query.replace(' ', "_");
        results
            .media_urls()
            .into_iter()
            .enumerate()
            .filter(|(_, url)| !url.is_empty())
            .map(|(i, url)| MediaDownload {
                url,
                filename: format!(
                    "{}_{}_{}.{}",
                    results.provider().slug(),
                    stem,
                    i + 1,
                    kind.extension()
                ),
                kind,
            })
            .collect()
    }
}

// =============================================================================
// Curation Models
// =============================================================================

/// Image suggestion in a curated record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedImage {
    pub source: String,
    pub url: String,
    pub description: String,
    pub photographer: String,
    pub download_url: String,
}

impl From<&UnsplashPhoto> for CuratedImage {
    fn from(photo: &UnsplashPhoto) -> Self {
        Self {
            source: Provider::Unsplash.slug().to_string(),
            url: photo.urls.regular.clone(),
            description: photo.description.clone().unwrap_or_default(),
            photographer: photo.user.name.clone(),
            download_url: photo.links.download.clone(),
        }
    }
}

impl From<&PexelsPhoto> for CuratedImage {
    fn from(photo: &PexelsPhoto) -> Self {
        Self {
            source: Provider::Pexels.slug().to_string(),
            url: photo.src.large.clone(),
            description: photo.alt.clone().unwrap_or_default(),
            photographer: photo.photographer.clone(),
            download_url: photo.src.original.clone(),
        }
    }
}

/// Curated bundle for a single research topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedTopic {
    pub images: Vec<CuratedImage>,
    pub suggested_animations: Vec<String>,
    pub color_palette: Vec<String>,
}

/// Topic → record mapping, serialized as a JSON object in topic order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuratedMedia {
    pub topics: Vec<(String, CuratedTopic)>,
}

impl CuratedMedia {
    pub fn get(&self, topic: &str) -> Option<&CuratedTopic> {
        self.topics.iter().find(|(t, _)| t == topic).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Serialize for CuratedMedia {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.topics.len()))?;
        for (topic, record) in &self.topics {
            map.serialize_entry(topic, record)?;
        }
        map.end()
    }
}
