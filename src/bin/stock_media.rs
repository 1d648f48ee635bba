//! stock-media - search, download and curate free stock media
//!
//! ```bash
//! stock-media --source unsplash --query "technology hci" --count 5
//! stock-media --source pexels --query "virtual reality" --count 3 --download
//! stock-media --curate
//! ```

use clap::Parser;

use site_media::cli::{Output, StockCli};
use site_media::{commands, logging};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = StockCli::parse();
    logging::init(cli.verbose);

    let output = Output::new(&cli);
    commands::stock_cmd(cli, &output).await.into()
}
