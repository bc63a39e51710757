//! wbcorpus-core - vocabulary and mention translation
//!
//! This crate provides the pieces of corpus ingestion that do not touch the
//! corpus file itself: building a frequency-filtered vocabulary from a
//! dictionary file, and translating raw tokens (including inline entity
//! mentions) into output tokens.
//!
//! # Features
//!
//! - Single-pass dictionary parsing with fatal errors on malformed lines
//! - Case folding and Unicode normalization shared by build and lookup
//! - Memoized mention resolution with hit/miss statistics
//! - Injectable randomness for the surface/label emission order
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use rand::SeedableRng;
//! use wbcorpus_core::{MentionCache, TokenTranslator, VocabularyBuilder};
//!
//! let vocab = VocabularyBuilder::new()
//!     .min_freq(5)
//!     .build_reader("w 10 dog\n".as_bytes(), Path::new("dict.txt"))?;
//!
//! let translator = TokenTranslator::default();
//! let mut cache = MentionCache::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! assert_eq!(translator.translate("Dog", &vocab, &mut cache, &mut rng), vec!["dog"]);
//! # Ok::<(), wbcorpus_core::CorpusError>(())
//! ```

pub mod error;
pub use error::{CorpusError, Result};

pub mod normalize;
pub use normalize::{NormalizationForm, Normalizer};

pub mod vocab;
pub use vocab::{DictionaryEntry, EntryKind, VocabularyBuilder, VocabularyConfig, VocabularySet};

pub mod mention;
pub use mention::{CacheStats, EntityPath, LabelFormat, MentionCache, MentionSyntax, TokenTranslator};
