//! Vocab command implementation.

use clap::Parser;
use std::path::PathBuf;

use super::VocabularyArgs;

/// Vocab command arguments.
#[derive(Parser)]
pub struct VocabCommand {
    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Write the token -> count map as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

use anyhow::{Context, Result as AnyhowResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

pub fn run(cmd: VocabCommand) -> AnyhowResult<()> {
    let start = Instant::now();
    let vocab = cmd.vocabulary.builder().build_file(&cmd.vocabulary.dictionary)?;

    println!(
        "Built vocabulary of {} words from {} in {:.2}s",
        vocab.len(),
        cmd.vocabulary.dictionary.display(),
        start.elapsed().as_secs_f64()
    );
    if let Some(total) = vocab.total_words() {
        println!("Dictionary total words: {}", total);
    }

    if let Some(path) = &cmd.output {
        // sorted for stable output
        let counts: BTreeMap<&str, u64> = vocab.iter().collect();
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &counts)?;
        println!("Vocabulary written to {}", path.display());
    }

    Ok(())
}
