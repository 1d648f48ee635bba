//! YouTube thumbnail fetcher
//!
//! Downloads `hqdefault.jpg` for every video a bibliography references.
//! A file already on disk counts as fetched, whatever its contents.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::bibliography::BibEntry;
use crate::download::fetch_to_file;

/// Thumbnail CDN, one directory per video ID
pub const YOUTUBE_THUMBNAIL_BASE: &str = "https://img.youtube.com/vi";

/// Extract the video ID from a YouTube URL: everything after the last `=`,
/// with backslashes removed. No validation is done.
pub fn video_id(url: &str) -> String {
    url.rsplit('=').next().unwrap_or_default().replace('\\', "")
}

/// Remote thumbnail URL for a video ID under `base_url`
pub fn thumbnail_url(base_url: &str, id: &str) -> String {
    format!("{}/{}/hqdefault.jpg", base_url, id)
}

/// What `ensure` did for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailStatus {
    Skipped(PathBuf),
    Downloaded(PathBuf),
}

/// Totals for a whole bibliography
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSummary {
    pub downloaded: usize,
    pub skipped: usize,
}

/// Thumbnail downloader
pub struct ThumbnailFetcher {
    base_url: String,
    dest_dir: PathBuf,
    client: reqwest::Client,
}

impl ThumbnailFetcher {
    /// Fetcher writing into `dest_dir` (usually `assets/img/youtube_thumbnails`)
    pub fn new(dest_dir: impl Into<PathBuf>) -> Self {
        Self::with_base_url(dest_dir, YOUTUBE_THUMBNAIL_BASE)
    }

    /// Create a fetcher with a custom base URL (for testing)
    pub fn with_base_url(dest_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            dest_dir: dest_dir.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Local path for a video ID
    pub fn local_path(&self, id: &str) -> PathBuf {
        self.dest_dir.join(format!("{}.jpg", id))
    }

    /// Make sure the thumbnail for `video_url` exists locally.
    ///
    /// Transport and HTTP errors are returned, not recovered.
    pub async fn ensure(&self, video_url: &str) -> Result<ThumbnailStatus> {
        let id = video_id(video_url);
        let remote_url = thumbnail_url(&self.base_url, &id);
        info!("{}", remote_url);

        let path = self.local_path(&id);
        if path.is_file() {
            info!("Skipping {} as file exists...", id);
            return Ok(ThumbnailStatus::Skipped(path));
        }

        fetch_to_file(&self.client, &remote_url, &path)
            .await
            .with_context(|| format!("Failed to download thumbnail for {}", id))?;
        Ok(ThumbnailStatus::Downloaded(path))
    }

    /// Ensure thumbnails for every entry, in file order. Stops at the first error.
    pub async fn fetch_all(&self, entries: &[BibEntry]) -> Result<ThumbnailSummary> {
        let mut summary = ThumbnailSummary::default();
        for entry in entries {
            for url in entry.video_urls() {
                match self.ensure(url).await? {
                    ThumbnailStatus::Skipped(_) => summary.skipped += 1,
                    ThumbnailStatus::Downloaded(_) => summary.downloaded += 1,
                }
            }
        }
        Ok(summary)
    }
}
