//! The interface between a record stream and an embedding trainer.

use super::config::TrainerConfig;
use std::io::Write;
use tracing::info;
use wbcorpus_core::Result;
use wbcorpus_stream::{ExportSummary, LabeledRecord, RecordWriter};

/// Something that takes the whole record stream, such as a trainer backend.
///
/// Implementations must stop at the first `Err` in the stream and return it.
pub trait RecordConsumer {
    /// What the consumer produces once the stream is drained.
    type Output;

    /// Drain `records`.
    fn consume<I>(&mut self, records: I, config: &TrainerConfig) -> Result<Self::Output>
    where
        I: Iterator<Item = Result<LabeledRecord>>;
}

/// Writing the prepared text file read by an external trainer binary.
///
/// The writer is flushed at the end so the file is complete when the call
/// returns; further records can still be written afterwards.
impl<W: Write> RecordConsumer for RecordWriter<W> {
    type Output = ExportSummary;

    fn consume<I>(&mut self, records: I, config: &TrainerConfig) -> Result<ExportSummary>
    where
        I: Iterator<Item = Result<LabeledRecord>>,
    {
        self.write_all(records)?;
        self.flush()?;

        let summary = self.summary();
        info!(
            records = summary.records,
            tokens = summary.tokens,
            vector_size = config.vector_size,
            "prepared training file"
        );
        Ok(summary)
    }
}
