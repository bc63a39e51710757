//! Immutable vocabulary produced by the builder.

use crate::normalize::Normalizer;
use ahash::AHashMap;
use compact_str::CompactString;
use std::borrow::Cow;

/// Normalized token -> aggregated frequency.
///
/// Carries the [`Normalizer`] it was built with; every lookup goes through
/// it, so a set built with `lower = true` answers `contains("Dog")` for a
/// dictionary entry `dog`.
#[derive(Debug, Clone)]
pub struct VocabularySet {
    counts: AHashMap<CompactString, u64>,
    normalizer: Normalizer,
    total_words: Option<u64>,
}

impl VocabularySet {
    /// Create a set from already-normalized counts.
    pub fn from_counts(counts: AHashMap<CompactString, u64>, normalizer: Normalizer) -> Self {
        Self {
            counts,
            normalizer,
            total_words: None,
        }
    }

    /// Create a set from raw tokens, normalizing and summing them.
    pub fn from_tokens<'a, I>(tokens: I, normalizer: Normalizer) -> Self
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        let mut counts: AHashMap<CompactString, u64> = AHashMap::new();
        for (token, count) in tokens {
            let key = normalizer.normalize(token);
            *counts.entry(CompactString::from(key.as_ref())).or_insert(0) += count;
        }
        Self::from_counts(counts, normalizer)
    }

    pub(crate) fn with_total_words(mut self, total: Option<u64>) -> Self {
        self.total_words = total;
        self
    }

    /// Normalize `token` and return the normalized form if it is in the set.
    pub fn lookup<'a>(&self, token: &'a str) -> Option<Cow<'a, str>> {
        let key = self.normalizer.normalize(token);
        if self.counts.contains_key(key.as_ref()) {
            Some(key)
        } else {
            None
        }
    }

    /// Check whether the normalized form of `token` is in the set.
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Aggregated count of the normalized form of `token`.
    pub fn count(&self, token: &str) -> Option<u64> {
        let key = self.normalizer.normalize(token);
        self.counts.get(key.as_ref()).copied()
    }

    /// The normalizer applied at build and lookup time.
    #[inline]
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Total word count declared by the dictionary's `t` line, if any.
    pub fn total_words(&self) -> Option<u64> {
        self.total_words
    }

    /// Iterate over `(token, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
