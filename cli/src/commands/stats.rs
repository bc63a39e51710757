//! Stats command implementation.

use clap::Parser;
use std::path::PathBuf;

use super::VocabularyArgs;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    #[command(flatten)]
    pub vocabulary: VocabularyArgs,

    /// Corpus shards, streamed in parallel
    #[arg(short, long, num_args = 1.., required = true)]
    pub corpus: Vec<PathBuf>,

    /// Seed for the mention emission order (shard i uses seed + i)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of most frequent tokens to print
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,

    /// Count threshold used for the retained-token summary
    #[arg(long, default_value_t = 5)]
    pub min_count: u64,

    /// Stream configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

use anyhow::Result as AnyhowResult;
use std::sync::Arc;
use std::time::Instant;
use wbcorpus_core::CacheStats;
use wbcorpus_stream::{stream_shards, StreamConfig};
use wbcorpus_training::{RecordConsumer, TokenCounter, TrainerConfig};

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let stream_config = match &cmd.config {
        Some(path) => StreamConfig::from_json_file(path)?,
        None => StreamConfig::default(),
    };
    let trainer_config = TrainerConfig::builder().min_count(cmd.min_count).build()?;

    let vocab = Arc::new(cmd.vocabulary.builder().build_file(&cmd.vocabulary.dictionary)?);
    println!("Vocabulary: {} words", vocab.len());

    let start = Instant::now();
    let shards = stream_shards(&cmd.corpus, vocab, &stream_config, cmd.seed, |_, mut streamer| {
        let mut counter = TokenCounter::new();
        counter.consume(streamer.by_ref(), &trainer_config)?;
        Ok((counter, streamer.cache_stats(), streamer.documents_seen()))
    })?;

    let mut counters = Vec::with_capacity(shards.len());
    let mut cache = CacheStats::default();
    let mut documents = 0;
    for (counter, stats, docs) in shards {
        counters.push(counter);
        cache = cache.merge(stats);
        documents += docs;
    }
    let counter = TokenCounter::merge_all(counters);
    let retained = counter.retained(cmd.min_count);

    println!(
        "Streamed {} shard(s) in {:.2}s",
        cmd.corpus.len(),
        start.elapsed().as_secs_f64()
    );
    println!("  Documents: {}", documents);
    println!(
        "  Records: {} ({} empty, {} tagged)",
        counter.records(),
        counter.empty_records(),
        counter.tagged_records()
    );
    println!(
        "  Tokens: {} ({} distinct)",
        counter.total_tokens(),
        counter.distinct_tokens()
    );
    println!("  Distinct tags: {}", counter.distinct_tags());
    println!(
        "  Mentions: {} paths, {} unresolved, {} hits, {} misses",
        cache.entries, cache.unresolved, cache.hits, cache.misses
    );
    if let Some(rate) = cache.hit_rate() {
        println!("  Mention cache hit rate: {:.1}%", rate * 100.0);
    }
    println!(
        "  Retained at min_count {}: {} tokens, {} occurrences",
        cmd.min_count, retained.distinct, retained.occurrences
    );

    if cmd.top > 0 {
        println!();
        println!("Top {} tokens:", cmd.top);
        for (token, count) in counter.top_tokens(cmd.top) {
            println!("  {:>10}  {}", count, token);
        }

        println!();
        println!("Top {} tags:", cmd.top);
        for (tag, count) in counter.top_tags(cmd.top) {
            println!("  {:>10}  {}", count, tag);
        }
    }

    Ok(())
}
