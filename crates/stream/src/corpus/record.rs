//! Output records.

use serde::{Deserialize, Serialize};

/// One labeled token list, produced per content line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Translated tokens in line order (possibly empty)
    pub tokens: Vec<String>,
    /// Document labels attached to this line
    pub tags: Vec<String>,
}

impl LabeledRecord {
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Self {
        Self { tokens, tags }
    }

    /// True when no token survived translation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }
}
