//! Configuration management for site-media
//!
//! Handles provider credentials and the on-disk layout of the website.
//! Credentials come from an optional `.site-media.toml` at the site root,
//! overridden by environment variables. They are read once at startup and
//! handed to the API clients explicitly.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{MediaKind, Provider};

/// Name of the optional config file at the site root
pub const CONFIG_FILE: &str = ".site-media.toml";

/// Provider credentials
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Unsplash access key (UNSPLASH_ACCESS_KEY)
    pub unsplash_access_key: Option<String>,
    /// Pexels API key (PEXELS_API_KEY)
    pub pexels_api_key: Option<String>,
    /// Pixabay API key (PIXABAY_API_KEY)
    pub pixabay_api_key: Option<String>,
}

impl Config {
    /// Load config from `<root>/.site-media.toml` (if present), then apply
    /// environment overrides.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let mut config = if path.is_file() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&raw).with_context(|| format!("Invalid config {}", path.display()))?
        } else {
            Self::default()
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Override fields from a variable lookup. Empty values count as unset.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for provider in Provider::ALL {
            if let Some(value) = lookup(provider.env_var()).filter(|v| !v.trim().is_empty()) {
                *self.slot(provider) = Some(value);
            }
        }
    }

    /// Credential configured for a provider
    pub fn credential(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Unsplash => self.unsplash_access_key.as_deref(),
            Provider::Pexels => self.pexels_api_key.as_deref(),
            Provider::Pixabay => self.pixabay_api_key.as_deref(),
        }
    }

    fn slot(&mut self, provider: Provider) -> &mut Option<String> {
        match provider {
            Provider::Unsplash => &mut self.unsplash_access_key,
            Provider::Pexels => &mut self.pexels_api_key,
            Provider::Pixabay => &mut self.pixabay_api_key,
        }
    }
}

/// Filesystem layout of the website, rooted at the repository checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `_bibliography/bib.bib`
    pub fn bibliography(&self) -> PathBuf {
        self.root.join("_bibliography").join("bib.bib")
    }

    /// `assets/img/youtube_thumbnails`
    pub fn thumbnail_dir(&self) -> PathBuf {
        self.root.join("assets").join("img").join("youtube_thumbnails")
    }

    /// `assets/img/stock`
    pub fn stock_image_dir(&self) -> PathBuf {
        self.root.join("assets").join("img").join("stock")
    }

    /// `assets/video/stock`
    pub fn stock_video_dir(&self) -> PathBuf {
        self.root.join("assets").join("video").join("stock")
    }

    /// Stock directory for a media kind
    pub fn stock_dir(&self, kind: MediaKind) -> PathBuf {
        match kind {
            MediaKind::Photos => self.stock_image_dir(),
            MediaKind::Videos => self.stock_video_dir(),
        }
    }

    /// `curated_media.json`
    pub fn curated_output(&self) -> PathBuf {
        self.root.join("curated_media.json")
    }
}
