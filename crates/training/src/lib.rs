//! wbcorpus-training - the seam between corpus streams and trainers
//!
//! This crate does not train embeddings. It defines the hyperparameter
//! record an embedding trainer is configured with and the
//! [`RecordConsumer`] trait through which a trainer receives the record
//! stream.
//!
//! # Features
//!
//! - `TrainerConfig` with validation and learning-rate decay
//! - `TokenCounter`: token/tag frequencies, mergeable across shards
//! - `RecordWriter` as a consumer, for trainers that read a prepared file
//!
//! # Example
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//! use rand::SeedableRng;
//! use wbcorpus_core::VocabularyBuilder;
//! use wbcorpus_stream::{CorpusStreamer, StreamConfig};
//! use wbcorpus_training::{RecordConsumer, TokenCounter, TrainerConfig};
//!
//! let vocab = VocabularyBuilder::new()
//!     .build_reader("w 10 dog\nw 10 barks\n".as_bytes(), Path::new("dict.txt"))?;
//!
//! let corpus = "@WikiBrainDoc\t5\tDog\nThe dog barks\nA dog\n";
//! let streamer = CorpusStreamer::from_reader(
//!     corpus.as_bytes(),
//!     "corpus.txt",
//!     Arc::new(vocab),
//!     StreamConfig::default(),
//!     rand::rngs::StdRng::seed_from_u64(0),
//! )?;
//!
//! let config = TrainerConfig::builder().min_count(2).build()?;
//! let mut counter = TokenCounter::new();
//! let retained = counter.consume(streamer, &config)?;
//!
//! assert_eq!(counter.records(), 2);
//! assert_eq!(counter.tag_count("t:5:Dog"), 2);
//! assert_eq!(retained.distinct, 1);
//! # Ok::<(), wbcorpus_training::CorpusError>(())
//! ```

pub use wbcorpus_core::{CorpusError, Result};

pub mod training;
pub use training::{
    RecordConsumer, RetainedSummary, TokenCounter, TrainerConfig, TrainerConfigBuilder,
    VectorFormat,
};
