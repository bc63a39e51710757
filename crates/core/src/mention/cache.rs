//! Mention resolution cache.
//!
//! Maps an entity path to its resolved label, or to the unresolved sentinel
//! (`None`). Entries are never evicted; one cache lives for one streaming
//! pass. Population is a check-then-insert sequence, so a cache must not be
//! shared across threads without a lock. Give each shard its own cache.

use ahash::AHashMap;
use compact_str::CompactString;

/// Cache of entity path -> resolved label (`None` = unresolved).
#[derive(Debug, Default)]
pub struct MentionCache {
    entries: AHashMap<CompactString, Option<CompactString>>,
    hits: u64,
    misses: u64,
}

impl MentionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache with room for `capacity` paths.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: AHashMap::with_capacity(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Get the cached resolution of `path`, or compute it with `resolve`.
    ///
    /// `resolve` runs at most once per distinct path for the cache's lifetime.
    pub fn get_or_resolve<F>(&mut self, path: &str, resolve: F) -> Option<&str>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        if self.entries.contains_key(path) {
            self.hits += 1;
        } else {
            self.misses += 1;
            let resolved = resolve(path).map(CompactString::from);
            self.entries.insert(CompactString::new(path), resolved);
        }

        self.entries.get(path).and_then(|label| label.as_deref())
    }

    /// Peek at a cached resolution without touching the counters.
    ///
    /// `None` if never seen, `Some(None)` if seen and unresolved.
    pub fn get(&self, path: &str) -> Option<Option<&str>> {
        self.entries.get(path).map(|label| label.as_deref())
    }

    /// Clear all entries and counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get the number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            unresolved: self.entries.values().filter(|v| v.is_none()).count(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of distinct entity paths seen
    pub entries: usize,
    /// Entries holding the unresolved sentinel
    pub unresolved: usize,
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that ran the resolver
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups answered from the cache.
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.hits + self.misses;
        (total > 0).then(|| self.hits as f64 / total as f64)
    }

    /// Combine statistics from independent caches.
    pub fn merge(self, other: CacheStats) -> CacheStats {
        CacheStats {
            entries: self.entries + other.entries,
            unresolved: self.unresolved + other.unresolved,
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
        }
    }
}
