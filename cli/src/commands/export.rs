//! Export command implementation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use super::VocabularyArgs;

/// Output format choice.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Space-joined tokens, one record per line
    Plain,
    /// One JSON object with tokens and tags per line
    Jsonl,
}

/// Export command arguments.
#[derive(Parser)]
pub struct ExportCommand {
    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Annotated corpus file (plain or .gz)
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// Prepared training file to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Plain)]
    pub format: FormatArg,

    /// Drop records with no tokens
    #[arg(long, default_value_t = false)]
    pub skip_empty: bool,

    /// Seed for the mention emission order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stream configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

use anyhow::Result as AnyhowResult;
use std::sync::Arc;
use std::time::Instant;
use wbcorpus_stream::{FileStreamer, RecordFormat, RecordWriter, StreamConfig};
use wbcorpus_training::{RecordConsumer, TrainerConfig};

pub fn run(cmd: ExportCommand) -> AnyhowResult<()> {
    let config = match &cmd.config {
        Some(path) => StreamConfig::from_json_file(path)?,
        None => StreamConfig::default(),
    };

    let start = Instant::now();
    let vocab = Arc::new(cmd.vocabulary.builder().build_file(&cmd.vocabulary.dictionary)?);
    println!(
        "Loaded vocabulary of {} words in {:.2}s",
        vocab.len(),
        start.elapsed().as_secs_f64()
    );

    let streamer = match cmd.seed {
        Some(seed) => FileStreamer::open_seeded(&cmd.corpus, vocab, config, seed)?,
        None => FileStreamer::open(&cmd.corpus, vocab, config)?,
    };

    let format = match cmd.format {
        FormatArg::Plain => RecordFormat::Plain,
        FormatArg::Jsonl => RecordFormat::JsonLines,
    };

    let start = Instant::now();
    let mut writer = RecordWriter::create(&cmd.output, format)?.skip_empty(cmd.skip_empty);
    let summary = writer.consume(streamer, &TrainerConfig::default())?;
    writer.finish()?;

    println!(
        "Exported {} records ({} tokens, {} empty skipped) to {} in {:.2}s",
        summary.records,
        summary.tokens,
        summary.skipped_empty,
        cmd.output.display(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
