//! wbcorpus-stream - streaming corpus annotation
//!
//! This crate turns an annotated plain-text corpus into a lazy sequence of
//! labeled token lists, one per content line, ready to be fed to an
//! embedding trainer.
//!
//! # Features
//!
//! - True line-at-a-time reading (plain or gzip), fail-fast on open
//! - Document boundaries with a per-document label window
//! - Inline mention resolution through a per-stream cache
//! - Parallel shards with independent caches
//! - Export to plain token lines or JSON lines
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//! use rand::SeedableRng;
//! use wbcorpus_stream::{CorpusStreamer, StreamConfig};
//! use wbcorpus_core::VocabularyBuilder;
//!
//! let vocab = VocabularyBuilder::new()
//!     .build_reader("w 10 dog\n".as_bytes(), Path::new("dict.txt"))?;
//!
//! let corpus = "@WikiBrainDoc\t5\tDog Breeds\ndog\n";
//! let streamer = CorpusStreamer::from_reader(
//!     corpus.as_bytes(),
//!     "corpus.txt",
//!     Arc::new(vocab),
//!     StreamConfig::default(),
//!     rand::rngs::StdRng::seed_from_u64(0),
//! )?;
//!
//! for record in streamer {
//!     let record = record?;
//!     assert_eq!(record.tokens, vec!["dog"]);
//!     assert_eq!(record.tags, vec!["t:5:Dog_Breeds"]);
//! }
//! # Ok::<(), wbcorpus_stream::CorpusError>(())
//! ```

// Re-export core types
pub use wbcorpus_core::{
    CacheStats, CorpusError, MentionCache, MentionSyntax, Result, VocabularyBuilder,
    VocabularySet,
};

pub mod config;
pub use config::StreamConfig;

pub mod corpus;
pub use corpus::{
    CorpusHeader, CorpusLine, CorpusStreamer, DocumentHeader, DocumentState, FileStreamer,
    LabeledRecord,
};

pub mod io;
pub use io::{open_source, ExportSummary, RecordFormat, RecordWriter};

pub mod shard;
pub use shard::stream_shards;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
