//! Streamer configuration.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use wbcorpus_core::{CorpusError, MentionSyntax, Result};

/// Configuration for reading an annotated corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Prefix of the corpus header line
    pub header_marker: String,
    /// First field of a document-boundary line
    pub document_marker: String,
    /// Lines starting with any of these are skipped
    pub noise_prefixes: Vec<String>,
    /// Number of leading content lines per document that carry its label
    pub tagged_lines: usize,
    /// Inline mention syntax and label format
    pub mention: MentionSyntax,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            header_marker: "@WikiBrainCorpus".to_string(),
            document_marker: "@WikiBrainDoc".to_string(),
            noise_prefixes: vec![
                "References".to_string(),
                "External links".to_string(),
                "thumb|".to_string(),
            ],
            tagged_lines: 5,
            mention: MentionSyntax::default(),
        }
    }
}

impl StreamConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        let config: StreamConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would misclassify every line.
    pub fn validate(&self) -> Result<()> {
        if self.header_marker.is_empty() {
            return Err(CorpusError::InvalidConfig(
                "header_marker must not be empty".to_string(),
            ));
        }
        if self.document_marker.is_empty() {
            return Err(CorpusError::InvalidConfig(
                "document_marker must not be empty".to_string(),
            ));
        }
        if self.noise_prefixes.iter().any(String::is_empty) {
            return Err(CorpusError::InvalidConfig(
                "noise_prefixes must not contain an empty prefix".to_string(),
            ));
        }
        if self.tagged_lines == 0 {
            return Err(CorpusError::InvalidConfig(
                "tagged_lines must be at least 1".to_string(),
            ));
        }
        if self.mention.marker.is_empty() {
            return Err(CorpusError::InvalidConfig(
                "mention marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
