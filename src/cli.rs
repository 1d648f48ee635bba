//! CLI - Command line interfaces for the two site-media tools
//!
//! # Examples
//!
//! ```bash
//! # Fetch missing YouTube thumbnails for the bibliography
//! youtube-thumbnails
//!
//! # Search stock media
//! stock-media --source unsplash --query "technology hci" --count 5
//! stock-media --source pexels --query "virtual reality" --type videos --download
//!
//! # Curate research topics into curated_media.json
//! stock-media --curate
//! ```

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use crate::config::SiteLayout;
use crate::models::{MediaKind, Provider};

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// youtube-thumbnails
// =============================================================================

/// Download YouTube thumbnails for videos and talks in the bibliography
#[derive(Parser, Debug)]
#[command(name = "youtube-thumbnails", version)]
pub struct ThumbnailsCli {
    /// Website root (contains _bibliography/ and assets/)
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Bibliography file (default: <root>/_bibliography/bib.bib)
    #[arg(long, short = 'b')]
    pub bib: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl ThumbnailsCli {
    pub fn layout(&self) -> SiteLayout {
        SiteLayout::new(&self.root)
    }

    pub fn bib_path(&self) -> PathBuf {
        self.bib.clone().unwrap_or_else(|| self.layout().bibliography())
    }
}

// =============================================================================
// stock-media
// =============================================================================

/// Search, download and curate free stock media for the website
#[derive(Parser, Debug)]
#[command(
    name = "stock-media",
    version,
    after_help = "EXAMPLES:\n\
                  stock-media --source unsplash --query \"technology hci\" --count 5\n\
                  stock-media --source pexels --query \"virtual reality\" --count 3\n\
                  stock-media --curate"
)]
pub struct StockCli {
    /// Media source
    #[arg(long, value_enum, default_value = "unsplash")]
    pub source: SourceArg,

    /// Search query (required unless using --curate)
    #[arg(long, required_unless_present = "curate")]
    pub query: Option<String>,

    /// Number of items to fetch
    #[arg(long, default_value = "5")]
    pub count: u32,

    /// Media type
    #[arg(long = "type", value_enum, default_value = "photos")]
    pub media_type: MediaTypeArg,

    /// Download the media files
    #[arg(long)]
    pub download: bool,

    /// Curate content for research topics
    #[arg(long)]
    pub curate: bool,

    /// Website root (downloads go under <root>/assets, curation to <root>/curated_media.json)
    #[arg(long, short = 'r', default_value = ".")]
    pub root: PathBuf,

    /// Also print search results as JSON on stdout
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl StockCli {
    pub fn layout(&self) -> SiteLayout {
        SiteLayout::new(&self.root)
    }

    /// JSON output is opt-in, whatever stdout is attached to
    pub fn should_json(&self) -> bool {
        self.json
    }
}

/// Provider choice on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceArg {
    Unsplash,
    Pexels,
    Pixabay,
}

impl From<SourceArg> for Provider {
    fn from(arg: SourceArg) -> Provider {
        match arg {
            SourceArg::Unsplash => Provider::Unsplash,
            SourceArg::Pexels => Provider::Pexels,
            SourceArg::Pixabay => Provider::Pixabay,
        }
    }
}

/// Media type choice on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTypeArg {
    Photos,
    Videos,
}

impl From<MediaTypeArg> for MediaKind {
    fn from(arg: MediaTypeArg) -> MediaKind {
        match arg {
            MediaTypeArg::Photos => MediaKind::Photos,
            MediaTypeArg::Videos => MediaKind::Videos,
        }
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &StockCli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print data as pretty JSON on stdout
    pub fn print<T: Serialize>(&self, data: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(data)?);
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let body = serde_json::json!({ "error": msg, "code": i32::from(code) });
            eprintln!("{}", body);
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Whether status lines are shown. JSON goes to stdout, so it does not
    /// hide them.
    pub fn shows_info(&self) -> bool {
        !self.quiet
    }

    /// Print a status line on stderr (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if self.shows_info() {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        ThumbnailsCli::command().debug_assert();
        StockCli::command().debug_assert();
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
    }

    #[test]
    fn test_bib_path_defaults_under_root() {
        let cli = ThumbnailsCli::parse_from(["youtube-thumbnails", "--root", "/site"]);
        assert_eq!(cli.bib_path(), PathBuf::from("/site/_bibliography/bib.bib"));

        let cli = ThumbnailsCli::parse_from(["youtube-thumbnails", "--bib", "refs.bib"]);
        assert_eq!(cli.bib_path(), PathBuf::from("refs.bib"));
    }

    #[test]
    fn test_source_conversion() {
        assert_eq!(Provider::from(SourceArg::Pixabay), Provider::Pixabay);
        assert_eq!(MediaKind::from(MediaTypeArg::Videos), MediaKind::Videos);
    }

    #[test]
    fn test_json_only_when_requested() {
        // Holds under `cargo test`, where stdout is usually not a terminal
        let cli = StockCli::parse_from(["stock-media", "--query", "vr"]);
        assert!(!cli.should_json());
        assert!(!Output::new(&cli).json);

        let cli = StockCli::parse_from(["stock-media", "--query", "vr", "--json"]);
        assert!(cli.should_json());
    }

    #[test]
    fn test_status_lines_survive_json_mode() {
        let output = Output {
            json: true,
            quiet: false,
        };
        assert!(output.shows_info());

        let output = Output {
            json: true,
            quiet: true,
        };
        assert!(!output.shows_info());
    }
}
