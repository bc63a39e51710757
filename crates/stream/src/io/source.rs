//! Opening corpus sources.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use wbcorpus_core::{CorpusError, Result};

const BUFFER_CAPACITY: usize = 1 << 16;

/// A boxed line source that can move between threads.
pub type Source = Box<dyn BufRead + Send>;

/// Open a corpus or dictionary file for buffered line reading.
///
/// Files ending in `.gz` are decompressed on the fly. The first buffer is
/// filled before returning, so a missing, unreadable or corrupt source
/// fails here rather than on the first read.
pub fn open_source(path: &Path) -> Result<Source> {
    let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;

    let mut reader: Source = if is_gzip(path) {
        Box::new(BufReader::with_capacity(
            BUFFER_CAPACITY,
            MultiGzDecoder::new(file),
        ))
    } else {
        Box::new(BufReader::with_capacity(BUFFER_CAPACITY, file))
    };

    reader.fill_buf().map_err(|e| CorpusError::io(path, e))?;
    Ok(reader)
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}
