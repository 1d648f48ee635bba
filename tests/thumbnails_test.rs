//! Thumbnail fetcher tests
//!
//! Covers ID derivation, the file-exists cache and fatal failures.

use mockito::Server;
use site_media::bibliography::{self, BibEntry};
use site_media::cli::ThumbnailsCli;
use site_media::commands;
use site_media::thumbnails::{
    thumbnail_url, video_id, ThumbnailFetcher, ThumbnailStatus, YOUTUBE_THUMBNAIL_BASE,
};

use clap::Parser;

fn entry(key: &str, fields: &[(&str, &str)]) -> BibEntry {
    BibEntry {
        key: key.to_string(),
        fields: fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

// =============================================================================
// Identifier Tests
// =============================================================================

#[test]
fn test_watch_url_to_thumbnail_url() {
    let id = video_id("https://x/watch?v=abc123");
    assert_eq!(id, "abc123");
    assert_eq!(
        thumbnail_url(YOUTUBE_THUMBNAIL_BASE, &id),
        "https://img.youtube.com/vi/abc123/hqdefault.jpg"
    );
}

// =============================================================================
// Fetch Tests (with mockito)
// =============================================================================

#[tokio::test]
async fn test_downloads_missing_thumbnail() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/abc123/hqdefault.jpg")
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(b"\xFF\xD8\xFFjpeg-bytes")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("assets/img/youtube_thumbnails");
    let fetcher = ThumbnailFetcher::with_base_url(&dest, server.url());

    let status = fetcher
        .ensure("https://www.youtube.com/watch?v=abc123")
        .await
        .unwrap();

    mock.assert_async().await;
    let path = dest.join("abc123.jpg");
    assert_eq!(status, ThumbnailStatus::Downloaded(path.clone()));
    assert_eq!(std::fs::read(&path).unwrap(), b"\xFF\xD8\xFFjpeg-bytes");
}

#[tokio::test]
async fn test_existing_file_skips_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/abc123/hqdefault.jpg")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    // Even an empty file counts as cached
    std::fs::write(dir.path().join("abc123.jpg"), b"").unwrap();
    let fetcher = ThumbnailFetcher::with_base_url(dir.path(), server.url());

    let status = fetcher.ensure("https://x/watch?v=abc123").await.unwrap();

    mock.assert_async().await;
    assert!(matches!(status, ThumbnailStatus::Skipped(_)));
}

#[tokio::test]
async fn test_second_run_is_idempotent() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/vid1/hqdefault.jpg")
        .with_status(200)
        .with_body("img")
        .expect(1)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = ThumbnailFetcher::with_base_url(dir.path(), server.url());
    let entries = vec![entry("a", &[("video", "https://x/watch?v=vid1")])];

    let first = fetcher.fetch_all(&entries).await.unwrap();
    let second = fetcher.fetch_all(&entries).await.unwrap();

    mock.assert_async().await;
    assert_eq!((first.downloaded, first.skipped), (1, 0));
    assert_eq!((second.downloaded, second.skipped), (0, 1));
}

#[tokio::test]
async fn test_video_and_talk_both_fetched() {
    let mut server = Server::new_async().await;
    let video = server
        .mock("GET", "/v1/hqdefault.jpg")
        .with_status(200)
        .with_body("v")
        .create_async()
        .await;
    let talk = server
        .mock("GET", "/t1/hqdefault.jpg")
        .with_status(200)
        .with_body("t")
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = ThumbnailFetcher::with_base_url(dir.path(), server.url());
    let entries = vec![
        entry(
            "paper",
            &[
                ("title", "Paper"),
                ("video", "https://x/watch?v=v1"),
                ("talk", "https://x/watch?v=t1"),
            ],
        ),
        entry("no-media", &[("title", "Other")]),
    ];

    let summary = fetcher.fetch_all(&entries).await.unwrap();

    video.assert_async().await;
    talk.assert_async().await;
    assert_eq!(summary.downloaded, 2);
    assert!(dir.path().join("v1.jpg").is_file());
    assert!(dir.path().join("t1.jpg").is_file());
}

#[tokio::test]
async fn test_http_error_is_fatal() {
    let mut server = Server::new_async().await;
    let _first = server
        .mock("GET", "/bad/hqdefault.jpg")
        .with_status(404)
        .create_async()
        .await;
    let never = server
        .mock("GET", "/later/hqdefault.jpg")
        .expect(0)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let fetcher = ThumbnailFetcher::with_base_url(dir.path(), server.url());
    let entries = vec![
        entry("a", &[("video", "https://x/watch?v=bad")]),
        entry("b", &[("video", "https://x/watch?v=later")]),
    ];

    assert!(fetcher.fetch_all(&entries).await.is_err());
    never.assert_async().await;
    assert!(!dir.path().join("bad.jpg").exists());
}

// =============================================================================
// Bibliography Tests
// =============================================================================

#[test]
fn test_bib_file_to_video_urls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bib.bib");
    std::fs::write(
        &path,
        r#"@inproceedings{a2021,
  title = {Touch Interfaces},
  year = {2021},
  video = {https://www.youtube.com/watch?v=AAA111}
}
"#,
    )
    .unwrap();

    let entries = bibliography::load(&path).unwrap();
    let urls: Vec<&str> = entries.iter().flat_map(|e| e.video_urls()).collect();
    assert_eq!(urls.len(), 1);
    assert_eq!(video_id(urls[0]), "AAA111");
}

#[tokio::test]
async fn test_malformed_bibliography_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("_bibliography")).unwrap();
    std::fs::write(
        dir.path().join("_bibliography/bib.bib"),
        "@article{broken, title = {never closed",
    )
    .unwrap();

    let root = dir.path().to_str().unwrap();
    let cli = ThumbnailsCli::parse_from(["youtube-thumbnails", "--root", root]);

    assert!(commands::thumbnails_cmd(&cli).await.is_err());
    assert!(!dir.path().join("assets/img/youtube_thumbnails").exists());
}

#[tokio::test]
async fn test_missing_bibliography_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let cli = ThumbnailsCli::parse_from(["youtube-thumbnails", "--root", root]);

    assert!(commands::thumbnails_cmd(&cli).await.is_err());
}
