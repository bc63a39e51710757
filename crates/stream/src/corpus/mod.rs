//! Corpus reading: line classification, document tracking and streaming.

pub mod document;
pub mod line;
pub mod record;
pub mod streamer;

pub use document::DocumentState;
pub use line::{classify, CorpusHeader, CorpusLine, DocumentHeader};
pub use record::LabeledRecord;
pub use streamer::{CorpusStreamer, FileStreamer};
