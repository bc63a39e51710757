//! Vocabulary construction from a word-count dictionary.
//!
//! The dictionary file lists `kind count word` triples. Only `w` entries whose
//! aggregated count clears the frequency cutoff end up in the resulting
//! [`VocabularySet`].

pub mod builder;
pub mod dictionary;
pub mod set;

pub use builder::{VocabularyBuilder, VocabularyConfig};
pub use dictionary::{DictionaryEntry, EntryKind};
pub use set::VocabularySet;
