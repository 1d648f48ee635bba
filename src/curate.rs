//! Research topic curation
//!
//! Builds `curated_media.json`: for each research topic, a few image
//! suggestions from Unsplash and Pexels plus animation and colour hints
//! picked from a fixed lookup table.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::models::{CuratedImage, CuratedMedia, CuratedTopic};
use crate::stock::StockMedia;

/// Topics curated by `stock-media --curate`
pub const RESEARCH_TOPICS: [&str; 5] = [
    "virtual reality",
    "augmented reality",
    "human computer interaction",
    "haptic feedback",
    "mobile interaction",
];

/// Unsplash results requested / kept per topic
const UNSPLASH_REQUEST: u32 = 3;
const UNSPLASH_KEEP: usize = 2;
/// Pexels results requested / kept per topic
const PEXELS_REQUEST: u32 = 2;
const PEXELS_KEEP: usize = 1;

struct Style {
    key: &'static str,
    animations: [&'static str; 3],
    palette: [&'static str; 3],
}

// Checked in order; first key contained in the topic wins.
const STYLES: &[Style] = &[
    Style {
        key: "virtual reality",
        animations: ["fade transitions", "parallax scrolling", "3D transforms"],
        palette: ["#6366f1", "#8b5cf6", "#06b6d4"],
    },
    Style {
        key: "augmented reality",
        animations: ["overlay effects", "depth transitions", "gesture animations"],
        palette: ["#10b981", "#3b82f6", "#f59e0b"],
    },
    Style {
        key: "human computer interaction",
        animations: ["hover effects", "progressive disclosure", "smooth transitions"],
        palette: ["#ef4444", "#f97316", "#eab308"],
    },
    Style {
        key: "haptic feedback",
        animations: ["vibration patterns", "wave animations", "spring physics"],
        palette: ["#8b5cf6", "#d946ef", "#06b6d4"],
    },
];

static DEFAULT_STYLE: Style = Style {
    key: "default",
    animations: ["pan and zoom", "fade effects", "slide transitions"],
    palette: ["#3b82f6", "#10b981", "#f59e0b"],
};

fn style_for(topic: &str) -> &'static Style {
    let topic = topic.to_lowercase();
    STYLES
        .iter()
        .find(|style| topic.contains(style.key))
        .unwrap_or(&DEFAULT_STYLE)
}

/// Animation suggestions for a topic
pub fn suggest_animations(topic: &str) -> Vec<String> {
    style_for(topic).animations.iter().map(|s| s.to_string()).collect()
}

/// Three-colour hex palette for a topic
pub fn suggest_color_palette(topic: &str) -> Vec<String> {
    style_for(topic).palette.iter().map(|s| s.to_string()).collect()
}

/// Curate a single topic
pub async fn curate_topic(media: &StockMedia, topic: &str) -> CuratedTopic {
    info!("Curating content for: {}", topic);

    let (_, unsplash) = media
        .search_unsplash(&format!("{} technology research", topic), UNSPLASH_REQUEST)
        .await;
    let (_, pexels) = media
        .search_pexels_photos(&format!("{} interface design", topic), PEXELS_REQUEST)
        .await;

    let images = unsplash
        .results
        .iter()
        .take(UNSPLASH_KEEP)
        .map(CuratedImage::from)
        .chain(pexels.photos.iter().take(PEXELS_KEEP).map(CuratedImage::from))
        .collect();

    CuratedTopic {
        images,
        suggested_animations: suggest_animations(topic),
        color_palette: suggest_color_palette(topic),
    }
}

/// Curate every topic, one after another
pub async fn curate(media: &StockMedia, topics: &[&str]) -> CuratedMedia {
    let mut curated = CuratedMedia::default();
    for topic in topics {
        let record = curate_topic(media, topic).await;
        curated.topics.push((topic.to_string(), record));
    }
    curated
}

/// Write the curated document as pretty JSON, replacing any existing file
pub async fn write(curated: &CuratedMedia, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(curated)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
