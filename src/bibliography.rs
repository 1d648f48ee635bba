//! Bibliography reader
//!
//! Thin wrapper over `biblatex`: entries are flattened to a citation key and
//! a plain string field map. Only the `video` and `talk` fields matter to
//! the thumbnail fetcher.

use anyhow::{anyhow, Context, Result};
use biblatex::{Bibliography, ChunksExt};
use std::collections::BTreeMap;
use std::path::Path;

/// Fields that may carry a YouTube URL, in lookup order
pub const VIDEO_FIELDS: [&str; 2] = ["video", "talk"];

/// One citation record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    pub key: String,
    pub fields: BTreeMap<String, String>,
}

impl BibEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Non-empty `video` and `talk` values, in that order
    pub fn video_urls(&self) -> impl Iterator<Item = &str> {
        VIDEO_FIELDS
            .iter()
            .filter_map(|name| self.field(name))
            .filter(|url| !url.trim().is_empty())
    }
}

/// Parse `.bib` source into entries, in file order
pub fn parse(src: &str) -> Result<Vec<BibEntry>> {
    let bibliography =
        Bibliography::parse(src).map_err(|e| anyhow!("Malformed bibliography: {}", e))?;

    Ok(bibliography
        .iter()
        .map(|entry| BibEntry {
            key: entry.key.clone(),
            fields: entry
                .fields
                .iter()
                .map(|(name, chunks)| (name.to_lowercase(), chunks.format_verbatim()))
                .collect(),
        })
        .collect())
}

/// Read and parse a `.bib` file
pub fn load(path: &Path) -> Result<Vec<BibEntry>> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bibliography {}", path.display()))?;
    parse(&src).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
@inproceedings{muller2020haptics,
  title = {Haptic Feedback in VR},
  author = {Müller, Florian},
  year = {2020},
  video = {https://www.youtube.com/watch?v=abc123},
  talk = {https://www.youtube.com/watch?v=talk456}
}

@article{plain2019,
  title = {No Media Here},
  author = {Doe, Jane},
  year = {2019}
}
"#;

    #[test]
    fn test_parse_entries_in_order() {
        let entries = parse(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "muller2020haptics");
        assert_eq!(entries[1].key, "plain2019");
    }

    #[test]
    fn test_video_urls() {
        let entries = parse(SAMPLE).unwrap();
        let urls: Vec<&str> = entries[0].video_urls().collect();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].ends_with("abc123"));
        assert!(urls[1].ends_with("talk456"));

        assert_eq!(entries[1].video_urls().count(), 0);
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let entry = BibEntry {
            key: "k".into(),
            fields: [("video".to_string(), "  ".to_string())].into_iter().collect(),
        };
        assert_eq!(entry.video_urls().count(), 0);
    }

    #[test]
    fn test_malformed_bibliography_fails() {
        assert!(parse("@article{broken, title = {unterminated").is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(load(Path::new("/nonexistent/bib.bib")).is_err());
    }
}
