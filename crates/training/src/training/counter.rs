//! Token and tag frequency counting over a record stream.
//!
//! The counter is the cheapest [`RecordConsumer`]: it sees exactly what a
//! trainer would see and reports how much of it survives `min_count`.
//! Shards are counted independently and merged afterwards.

use super::config::TrainerConfig;
use super::consumer::RecordConsumer;
use ahash::AHashMap;
use compact_str::CompactString;
use rayon::prelude::*;
use tracing::info;
use wbcorpus_core::Result;
use wbcorpus_stream::LabeledRecord;

/// Frequencies of output tokens and tags.
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    tokens: AHashMap<CompactString, u64>,
    tags: AHashMap<CompactString, u64>,
    records: u64,
    empty_records: u64,
    tagged_records: u64,
}

/// What a trainer would keep at a given `min_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetainedSummary {
    /// Distinct tokens at or above the threshold
    pub distinct: usize,
    /// Occurrences of those tokens
    pub occurrences: u64,
}

impl TokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record.
    pub fn add_record(&mut self, record: &LabeledRecord) {
        self.records += 1;
        if record.is_empty() {
            self.empty_records += 1;
        }
        if record.is_tagged() {
            self.tagged_records += 1;
        }

        for token in &record.tokens {
            *self.tokens.entry(CompactString::from(token.as_str())).or_insert(0) += 1;
        }
        for tag in &record.tags {
            *self.tags.entry(CompactString::from(tag.as_str())).or_insert(0) += 1;
        }
    }

    /// Fold another counter into this one.
    pub fn merge(&mut self, other: TokenCounter) {
        for (token, count) in other.tokens {
            *self.tokens.entry(token).or_insert(0) += count;
        }
        for (tag, count) in other.tags {
            *self.tags.entry(tag).or_insert(0) += count;
        }
        self.records += other.records;
        self.empty_records += other.empty_records;
        self.tagged_records += other.tagged_records;
    }

    /// Merge per-shard counters in parallel.
    pub fn merge_all(counters: Vec<TokenCounter>) -> TokenCounter {
        counters
            .into_par_iter()
            .reduce(TokenCounter::new, |mut acc, counter| {
                acc.merge(counter);
                acc
            })
    }

    /// Occurrences of `token` in the output streams.
    pub fn token_count(&self, token: &str) -> u64 {
        self.tokens.get(token).copied().unwrap_or(0)
    }

    /// Occurrences of `tag` across records.
    pub fn tag_count(&self, tag: &str) -> u64 {
        self.tags.get(tag).copied().unwrap_or(0)
    }

    pub fn distinct_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn distinct_tags(&self) -> usize {
        self.tags.len()
    }

    /// Total token occurrences.
    pub fn total_tokens(&self) -> u64 {
        self.tokens.values().sum()
    }

    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn empty_records(&self) -> u64 {
        self.empty_records
    }

    pub fn tagged_records(&self) -> u64 {
        self.tagged_records
    }

    /// Tokens that occur at least `min_count` times.
    pub fn retained(&self, min_count: u64) -> RetainedSummary {
        self.tokens
            .values()
            .filter(|&&count| count >= min_count)
            .fold(
                RetainedSummary {
                    distinct: 0,
                    occurrences: 0,
                },
                |mut acc, &count| {
                    acc.distinct += 1;
                    acc.occurrences += count;
                    acc
                },
            )
    }

    /// The `k` most frequent tokens, highest first, ties by token text.
    pub fn top_tokens(&self, k: usize) -> Vec<(&str, u64)> {
        top_k(&self.tokens, k)
    }

    /// The `k` most frequent tags, highest first, ties by tag text.
    pub fn top_tags(&self, k: usize) -> Vec<(&str, u64)> {
        top_k(&self.tags, k)
    }
}

fn top_k(counts: &AHashMap<CompactString, u64>, k: usize) -> Vec<(&str, u64)> {
    let mut entries: Vec<(&str, u64)> = counts
        .iter()
        .map(|(token, &count)| (token.as_str(), count))
        .collect();
    entries.par_sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries.truncate(k);
    entries
}

impl RecordConsumer for TokenCounter {
    type Output = RetainedSummary;

    fn consume<I>(&mut self, records: I, config: &TrainerConfig) -> Result<RetainedSummary>
    where
        I: Iterator<Item = Result<LabeledRecord>>,
    {
        for record in records {
            self.add_record(&record?);
        }

        let retained = self.retained(config.min_count);
        info!(
            records = self.records,
            distinct = self.tokens.len(),
            retained = retained.distinct,
            min_count = config.min_count,
            "counted record stream"
        );
        Ok(retained)
    }
}
