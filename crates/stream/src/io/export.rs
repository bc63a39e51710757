//! Writing records to a prepared training file.
//!
//! `Plain` writes one space-joined token line per record, the input format
//! of word2vec-style trainer binaries. `JsonLines` keeps the tags as well.

use crate::corpus::LabeledRecord;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use wbcorpus_core::{CorpusError, Result};

/// Output format of a [`RecordWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// Space-joined tokens, one record per line
    #[default]
    Plain,
    /// `{"tokens": [...], "tags": [...]}` per line
    JsonLines,
}

/// Counts reported after an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub records: u64,
    pub skipped_empty: u64,
    pub tokens: u64,
}

/// Buffered writer of labeled records.
pub struct RecordWriter<W: Write> {
    writer: BufWriter<W>,
    destination: PathBuf,
    format: RecordFormat,
    skip_empty: bool,
    summary: ExportSummary,
}

impl RecordWriter<File> {
    /// Create (or truncate) `path` and write records to it.
    pub fn create(path: &Path, format: RecordFormat) -> Result<Self> {
        let file = File::create(path).map_err(|e| CorpusError::io(path, e))?;
        Ok(Self::new(file, path, format))
    }
}

impl<W: Write> RecordWriter<W> {
    /// Wrap any writer. `destination` is only used in error messages.
    pub fn new(writer: W, destination: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            writer: BufWriter::new(writer),
            destination: destination.into(),
            format,
            skip_empty: false,
            summary: ExportSummary::default(),
        }
    }

    /// Drop records with no tokens instead of writing empty lines.
    pub fn skip_empty(mut self, skip: bool) -> Self {
        self.skip_empty = skip;
        self
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Write one record.
    pub fn write(&mut self, record: &LabeledRecord) -> Result<()> {
        if self.skip_empty && record.is_empty() {
            self.summary.skipped_empty += 1;
            return Ok(());
        }

        match self.format {
            RecordFormat::Plain => {
                let line = record.tokens.join(" ");
                writeln!(self.writer, "{line}").map_err(|e| CorpusError::io(&self.destination, e))?;
            }
            RecordFormat::JsonLines => {
                serde_json::to_writer(&mut self.writer, record)?;
                self.writer
                    .write_all(b"\n")
                    .map_err(|e| CorpusError::io(&self.destination, e))?;
            }
        }

        self.summary.records += 1;
        self.summary.tokens += record.tokens.len() as u64;
        Ok(())
    }

    /// Write every record of a stream, stopping at the first error.
    pub fn write_all<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<LabeledRecord>>,
    {
        for record in records {
            self.write(&record?)?;
        }
        Ok(())
    }

    /// Counts so far.
    pub fn summary(&self) -> ExportSummary {
        self.summary
    }

    /// Flush buffered output to the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| CorpusError::io(&self.destination, e))
    }

    /// Flush and return the final counts.
    pub fn finish(mut self) -> Result<ExportSummary> {
        self.flush()?;
        Ok(self.summary)
    }
}
