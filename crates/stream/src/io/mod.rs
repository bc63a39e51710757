//! Opening corpus sources and writing prepared training files.

pub mod export;
pub mod source;

pub use export::{ExportSummary, RecordFormat, RecordWriter};
pub use source::{open_source, Source};
