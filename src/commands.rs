//! CLI Command Handlers
//!
//! Implements both tools on top of the library. The thumbnail handler
//! propagates failures; the stock handlers report them through `Output`
//! and return an `ExitCode`.

use anyhow::Result;

use crate::bibliography;
use crate::cli::{ExitCode, Output, StockCli, ThumbnailsCli};
use crate::config::{Config, SiteLayout};
use crate::curate::{self, RESEARCH_TOPICS};
use crate::download::{DownloadReport, Downloader};
use crate::models::{MediaDownload, MediaKind, Provider};
use crate::stock::StockMedia;
use crate::thumbnails::{ThumbnailFetcher, ThumbnailSummary};

// =============================================================================
// youtube-thumbnails
// =============================================================================

/// Fetch every missing thumbnail referenced by the bibliography
pub async fn thumbnails_cmd(cli: &ThumbnailsCli) -> Result<ThumbnailSummary> {
    let entries = bibliography::load(&cli.bib_path())?;
    let fetcher = ThumbnailFetcher::new(cli.layout().thumbnail_dir());
    fetcher.fetch_all(&entries).await
}

// =============================================================================
// stock-media
// =============================================================================

/// Dispatch `stock-media` to curation or a single search
pub async fn stock_cmd(cli: StockCli, output: &Output) -> ExitCode {
    let layout = cli.layout();
    let config = match Config::load(layout.root()) {
        Ok(config) => config,
        Err(e) => return output.error(format!("{:#}", e), ExitCode::Error),
    };
    let media = StockMedia::new(&config);

    if cli.curate {
        return curate_cmd(&media, &layout, output).await;
    }

    // clap enforces this unless --curate; keep the guard for programmatic use
    let Some(query) = cli.query.as_deref() else {
        return output.error("--query is required unless using --curate", ExitCode::InvalidArgs);
    };

    let request = SearchRequest {
        provider: cli.source.into(),
        query,
        count: cli.count,
        kind: cli.media_type.into(),
        download: cli.download,
    };
    let downloader = Downloader::new(layout);
    search_cmd(&media, &downloader, &request, output).await
}

/// Parameters of one search run
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    pub provider: Provider,
    pub query: &'a str,
    pub count: u32,
    pub kind: MediaKind,
    pub download: bool,
}

/// Search one provider and optionally download every result
pub async fn search_cmd(
    media: &StockMedia,
    downloader: &Downloader,
    request: &SearchRequest<'_>,
    output: &Output,
) -> ExitCode {
    let outcome = media
        .search(request.provider, request.query, request.count, request.kind)
        .await;

    output.info(format!(
        "Found {} {} on {}",
        outcome.results.len(),
        outcome.results.kind(),
        outcome.results.provider()
    ));

    if output.json {
        if let Err(e) = output.print(&outcome) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    }

    if request.download {
        let items = MediaDownload::from_results(&outcome.results, request.query);
        let report = downloader.download_all(&items).await;
        report_downloads(&report, output);
    }

    ExitCode::Success
}

fn report_downloads(report: &DownloadReport, output: &Output) {
    if report.failed.is_empty() {
        output.info(format!("Saved {} file(s)", report.saved.len()));
    } else {
        output.info(format!(
            "Saved {} file(s), {} failed: {}",
            report.saved.len(),
            report.failed.len(),
            report.failed.join(", ")
        ));
    }
}

/// Curate the research topics into `curated_media.json`
pub async fn curate_cmd(media: &StockMedia, layout: &SiteLayout, output: &Output) -> ExitCode {
    let curated = curate::curate(media, &RESEARCH_TOPICS).await;
    let path = layout.curated_output();

    if let Err(e) = curate::write(&curated, &path).await {
        return output.error(format!("{:#}", e), ExitCode::Error);
    }

    output.info("Curated content saved to curated_media.json");
    ExitCode::Success
}
