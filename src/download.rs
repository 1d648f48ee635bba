//! Media downloads into the site's stock directories
//!
//! Bodies are streamed chunk by chunk into `<name>.part` and renamed into
//! place once complete, so an interrupted run never leaves a truncated file
//! under the final name.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::config::SiteLayout;
use crate::models::{MediaDownload, MediaKind};

/// Result of a batch download
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadReport {
    pub saved: Vec<PathBuf>,
    pub failed: Vec<String>,
}

/// Downloads media files into `assets/img/stock` and `assets/video/stock`
pub struct Downloader {
    layout: SiteLayout,
    client: reqwest::Client,
}

impl Downloader {
    pub fn new(layout: SiteLayout) -> Self {
        Self {
            layout,
            client: reqwest::Client::new(),
        }
    }

    /// Download `url` as `filename` into the directory for `kind`.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn download(&self, url: &str, filename: &str, kind: MediaKind) -> Option<PathBuf> {
        let path = self.layout.stock_dir(kind).join(filename);

        match fetch_to_file(&self.client, url, &path).await {
            Ok(()) => {
                info!("Downloaded: {}", filename);
                Some(path)
            }
            Err(e) => {
                warn!("Error downloading {}: {:#}", filename, e);
                None
            }
        }
    }

    /// Download every item in order. A failed item doesn't stop the batch.
    pub async fn download_all(&self, items: &[MediaDownload]) -> DownloadReport {
        let mut report = DownloadReport::default();
        for item in items {
            match self.download(&item.url, &item.filename, item.kind).await {
                Some(path) => report.saved.push(path),
                None => report.failed.push(item.filename.clone()),
            }
        }
        report
    }
}

/// GET `url` and write the body to `dest` via a `.part` file.
///
/// The parent directory is created if missing. On error the partial file is
/// removed and `dest` is left untouched.
pub async fn fetch_to_file(client: &reqwest::Client, url: &str, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} returned HTTP {}", url, status);
    }

    let part = part_path(dest);
    let result: Result<()> = async {
        let mut file = tokio::fs::File::create(&part)
            .await
            .with_context(|| format!("Failed to create {}", part.display()))?;
        while let Some(chunk) = response.chunk().await.context("Failed to read response body")? {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;
        drop(file);
        tokio::fs::rename(&part, dest)
            .await
            .with_context(|| format!("Failed to move download into {}", dest.display()))
    }
    .await;

    if result.is_err() {
        let _ = tokio::fs::remove_file(&part).await;
    }
    result
}

fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
