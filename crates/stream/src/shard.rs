//! Parallel streaming of corpus shards.
//!
//! Every shard gets its own [`FileStreamer`] and therefore its own mention
//! cache and random source; shards share only the read-only vocabulary.

use crate::config::StreamConfig;
use crate::corpus::FileStreamer;
use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use wbcorpus_core::{Result, VocabularySet};

/// Run `f` over one streamer per shard on the rayon pool.
///
/// All shards are opened up front, so a missing file fails before any work
/// starts. Results come back in shard order. With a `seed`, shard `i` is
/// seeded with `seed + i`.
pub fn stream_shards<P, F, T>(
    paths: &[P],
    vocabulary: Arc<VocabularySet>,
    config: &StreamConfig,
    seed: Option<u64>,
    f: F,
) -> Result<Vec<T>>
where
    P: AsRef<Path>,
    F: Fn(usize, FileStreamer) -> Result<T> + Sync + Send,
    T: Send,
{
    let streamers = paths
        .iter()
        .enumerate()
        .map(|(i, path)| {
            let path = path.as_ref();
            match seed {
                Some(seed) => FileStreamer::open_seeded(
                    path,
                    Arc::clone(&vocabulary),
                    config.clone(),
                    seed.wrapping_add(i as u64),
                ),
                None => FileStreamer::open(path, Arc::clone(&vocabulary), config.clone()),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    info!(shards = streamers.len(), "streaming shards");

    streamers
        .into_par_iter()
        .enumerate()
        .map(|(i, streamer)| f(i, streamer))
        .collect()
}
