//! Trainer-facing pieces: hyperparameters and record consumers.

pub mod config;
pub mod consumer;
pub mod counter;

pub use config::{TrainerConfig, TrainerConfigBuilder, VectorFormat};
pub use consumer::RecordConsumer;
pub use counter::{RetainedSummary, TokenCounter};
