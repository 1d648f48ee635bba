//! Curation tests
//!
//! Runs without credentials, so every search resolves to sample data and
//! no request leaves the machine.

use serde_json::Value;
use site_media::cli::Output;
use site_media::commands::curate_cmd;
use site_media::curate::{self, suggest_animations, suggest_color_palette, RESEARCH_TOPICS};
use site_media::{Config, SiteLayout, StockMedia};

#[tokio::test]
async fn test_curate_all_topics() {
    let media = StockMedia::new(&Config::default());
    let curated = curate::curate(&media, &RESEARCH_TOPICS).await;

    assert_eq!(curated.len(), 5);
    for topic in RESEARCH_TOPICS {
        let record = curated.get(topic).unwrap();
        // Two Unsplash suggestions then one Pexels suggestion
        assert_eq!(record.images.len(), 3);
        assert_eq!(record.images[0].source, "unsplash");
        assert_eq!(record.images[1].source, "unsplash");
        assert_eq!(record.images[2].source, "pexels");
        assert_eq!(record.color_palette.len(), 3);
        assert!(!record.suggested_animations.is_empty());
    }
}

#[tokio::test]
async fn test_curated_images_use_topic_queries() {
    let media = StockMedia::new(&Config::default());
    let record = curate::curate_topic(&media, "haptic feedback").await;

    assert_eq!(
        record.images[0].description,
        "Sample haptic feedback technology research image 1"
    );
    assert_eq!(
        record.images[0].url,
        "https://source.unsplash.com/800x600/?haptic,feedback,technology,research&sig=0"
    );
    assert_eq!(
        record.images[2].description,
        "Sample haptic feedback interface design image 1"
    );
    assert_eq!(record.images[2].download_url, "https://picsum.photos/1200/800?random=0");
    assert_eq!(record.color_palette, suggest_color_palette("haptic feedback"));
}

#[tokio::test]
async fn test_curate_cmd_writes_json_document() {
    let dir = tempfile::tempdir().unwrap();
    let layout = SiteLayout::new(dir.path());
    std::fs::write(layout.curated_output(), "stale content").unwrap();

    let media = StockMedia::new(&Config::default());
    let output = Output {
        json: false,
        quiet: true,
    };
    let code = curate_cmd(&media, &layout, &output).await;
    assert_eq!(i32::from(code), 0);

    let raw = std::fs::read_to_string(layout.curated_output()).unwrap();
    // Pretty printed with two-space indentation, topics in order
    assert!(raw.starts_with("{\n  \"virtual reality\": {"));
    assert!(raw.find("\"augmented reality\"").unwrap() < raw.find("\"mobile interaction\"").unwrap());

    let doc: Value = serde_json::from_str(&raw).unwrap();
    let topics = doc.as_object().unwrap();
    assert_eq!(topics.len(), 5);
    for (_, record) in topics {
        assert!(record["images"].is_array());
        assert_eq!(record["color_palette"].as_array().unwrap().len(), 3);
        assert!(!record["suggested_animations"].as_array().unwrap().is_empty());
        let image = &record["images"][0];
        for field in ["source", "url", "description", "photographer", "download_url"] {
            assert!(image[field].is_string(), "missing {}", field);
        }
    }
    assert_eq!(
        doc["mobile interaction"]["suggested_animations"],
        serde_json::json!(["pan and zoom", "fade effects", "slide transitions"])
    );
}

#[test]
fn test_virtual_reality_demo_resolves_to_vr_entry() {
    assert_eq!(
        suggest_animations("virtual reality demo"),
        suggest_animations("virtual reality")
    );
    assert_eq!(
        suggest_color_palette("virtual reality demo"),
        vec!["#6366f1", "#8b5cf6", "#06b6d4"]
    );
}

#[test]
fn test_unmatched_topic_resolves_to_default() {
    assert_eq!(
        suggest_color_palette("mobile interaction"),
        vec!["#3b82f6", "#10b981", "#f59e0b"]
    );
}
