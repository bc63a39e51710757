//! Vocabulary builder.
//!
//! Reads a dictionary in a single pass, folds and aggregates word counts,
//! then applies the frequency cutoff (and optional top-N cap) to the
//! aggregated totals.

use super::dictionary::{DictionaryEntry, EntryKind};
use super::set::VocabularySet;
use crate::error::{CorpusError, Result};
use crate::normalize::{NormalizationForm, Normalizer};
use ahash::AHashMap;
use compact_str::CompactString;
use dary_heap::OctonaryHeap;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Configuration for vocabulary construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Minimum aggregated count for a word to be kept
    pub min_freq: u64,
    /// Lowercase words before aggregation (and at lookup)
    pub lower: bool,
    /// Unicode normalization applied before lowercasing
    pub form: NormalizationForm,
    /// Keep only this many of the most frequent words
    pub max_words: Option<usize>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            min_freq: 5,
            lower: true,
            form: NormalizationForm::None,
            max_words: None,
        }
    }
}

impl VocabularyConfig {
    /// The normalizer this configuration implies.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.form, self.lower)
    }
}

/// Builder for a [`VocabularySet`].
#[derive(Debug, Clone, Default)]
pub struct VocabularyBuilder {
    config: VocabularyConfig,
}

impl VocabularyBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from an existing configuration.
    pub fn with_config(config: VocabularyConfig) -> Self {
        Self { config }
    }

    /// Set the minimum aggregated frequency.
    pub fn min_freq(mut self, min_freq: u64) -> Self {
        self.config.min_freq = min_freq;
        self
    }

    /// Enable or disable lowercasing.
    pub fn lower(mut self, lower: bool) -> Self {
        self.config.lower = lower;
        self
    }

    /// Set the Unicode normalization form.
    pub fn normalization_form(mut self, form: NormalizationForm) -> Self {
        self.config.form = form;
        self
    }

    /// Cap the vocabulary at the `max_words` most frequent words.
    pub fn max_words(mut self, max_words: Option<usize>) -> Self {
        self.config.max_words = max_words;
        self
    }

    pub fn config(&self) -> &VocabularyConfig {
        &self.config
    }

    /// Build from a dictionary file.
    ///
    /// Fails immediately if the file cannot be opened.
    pub fn build_file(&self, path: &Path) -> Result<VocabularySet> {
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        self.build_reader(BufReader::new(file), path)
    }

    /// Build from any line reader. `origin` is only used in error messages.
    pub fn build_reader<R: BufRead>(&self, mut reader: R, origin: &Path) -> Result<VocabularySet> {
        let normalizer = self.config.normalizer();
        let mut counts: AHashMap<CompactString, u64> = AHashMap::new();
        let mut total_words = None;
        let mut skipped = 0usize;

        let mut line = String::new();
        let mut line_number = 0usize;
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| CorpusError::io(origin, e))?;
            if read == 0 {
                break;
            }
            line_number += 1;

            let entry =
                DictionaryEntry::parse(&line).map_err(|reason| CorpusError::MalformedDictionary {
                    path: origin.to_path_buf(),
                    line: line_number,
                    content: line.trim_end().to_string(),
                    reason: reason.to_string(),
                })?;

            match entry.kind {
                EntryKind::Word => {
                    let key = normalizer.normalize(entry.surface);
                    if let Some(count) = counts.get_mut(key.as_ref()) {
                        *count = count.checked_add(entry.count).ok_or_else(|| {
                            CorpusError::MalformedDictionary {
                                path: origin.to_path_buf(),
                                line: line_number,
                                content: line.trim_end().to_string(),
                                reason: "aggregated count overflows".to_string(),
                            }
                        })?;
                    } else {
                        counts.insert(CompactString::from(key.as_ref()), entry.count);
                    }
                }
                EntryKind::Total => total_words = Some(entry.count),
                EntryKind::Mention | EntryKind::Other => skipped += 1,
            }
        }

        let aggregated = counts.len();
        counts.retain(|_, count| *count >= self.config.min_freq);

        if let Some(max_words) = self.config.max_words {
            if counts.len() > max_words {
                counts = top_words(counts, max_words);
            }
        }

        info!(
            path = %origin.display(),
            lines = line_number,
            aggregated,
            retained = counts.len(),
            skipped,
            min_freq = self.config.min_freq,
            "built vocabulary"
        );

        Ok(VocabularySet::from_counts(counts, normalizer).with_total_words(total_words))
    }
}

/// A word ranked for the top-N cut: higher count first, then smaller text.
#[derive(Debug, PartialEq, Eq)]
struct RankedWord {
    count: u64,
    word: CompactString,
}

impl Ord for RankedWord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for RankedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keep the `n` best-ranked words using a bounded min-heap.
fn top_words(counts: AHashMap<CompactString, u64>, n: usize) -> AHashMap<CompactString, u64> {
    let mut heap: OctonaryHeap<Reverse<RankedWord>> = OctonaryHeap::with_capacity(n + 1);
    for (word, count) in counts {
        heap.push(Reverse(RankedWord { count, word }));
        if heap.len() > n {
            heap.pop();
        }
    }
    heap.into_iter()
        .map(|Reverse(ranked)| (ranked.word, ranked.count))
        .collect()
}
