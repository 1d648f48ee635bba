//! youtube-thumbnails - fetch thumbnails for videos cited in the bibliography
//!
//! ```bash
//! youtube-thumbnails --root path/to/site
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use site_media::cli::ThumbnailsCli;
use site_media::{commands, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ThumbnailsCli::parse();
    logging::init(cli.verbose);

    // Parse and transport failures abort the run
    let summary = commands::thumbnails_cmd(&cli).await?;
    info!(
        downloaded = summary.downloaded,
        skipped = summary.skipped,
        "Thumbnails up to date"
    );
    Ok(())
}
