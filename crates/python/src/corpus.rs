//! PyO3 wrappers for corpus streaming
//!
//! `Corpus` is a restartable iterable: every `iter()` re-opens the file, so
//! trainers that make several passes (vocabulary scan, then epochs) can be
//! handed the same object.

use pyo3::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use wbcorpus_core::VocabularySet;
use wbcorpus_stream::{FileStreamer, StreamConfig};

use crate::error::IntoPyErr;
use crate::vocabulary::PyVocabulary;

type PyRecord = (Vec<String>, Vec<String>);

/// An annotated corpus file yielding `(tokens, tags)` per content line
#[pyclass(name = "Corpus", frozen)]
pub struct PyCorpus {
    path: PathBuf,
    vocabulary: Arc<VocabularySet>,
    config: StreamConfig,
    seed: Option<u64>,
}

#[pymethods]
impl PyCorpus {
    /// Stream `path` against `vocabulary`. A seed makes every pass identical.
    #[new]
    #[pyo3(signature = (path, vocabulary, seed=None, config=None))]
    fn new(
        path: PathBuf,
        vocabulary: PyRef<'_, PyVocabulary>,
        seed: Option<u64>,
        config: Option<PathBuf>,
    ) -> PyResult<Self> {
        let config = match config {
            Some(config) => StreamConfig::from_json_file(&config).map_err(|e| e.into_py_err())?,
            None => StreamConfig::default(),
        };
        Ok(PyCorpus {
            path,
            vocabulary: Arc::clone(&vocabulary.inner),
            config,
            seed,
        })
    }

    /// Start a new pass over the file
    fn __iter__(&self) -> PyResult<PyCorpusIterator> {
        let vocabulary = Arc::clone(&self.vocabulary);
        let config = self.config.clone();
        let streamer = match self.seed {
            Some(seed) => FileStreamer::open_seeded(&self.path, vocabulary, config, seed),
            None => FileStreamer::open(&self.path, vocabulary, config),
        }
        .map_err(|e| e.into_py_err())?;
        Ok(PyCorpusIterator { inner: streamer })
    }

    fn __repr__(&self) -> String {
        format!("Corpus(path={:?})", self.path.display().to_string())
    }
}

/// One pass over a corpus file
#[pyclass(name = "CorpusIterator")]
pub struct PyCorpusIterator {
    inner: FileStreamer,
}

#[pymethods]
impl PyCorpusIterator {
    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self, py: Python<'_>) -> PyResult<Option<PyRecord>> {
        let inner = &mut self.inner;
        match py.allow_threads(|| inner.next()) {
            Some(Ok(record)) => Ok(Some((record.tokens, record.tags))),
            Some(Err(e)) => Err(e.into_py_err()),
            None => Ok(None),
        }
    }

    /// Documents opened so far in this pass
    #[getter]
    fn documents_seen(&self) -> usize {
        self.inner.documents_seen()
    }

    /// `(hits, misses)` of the mention cache in this pass
    #[getter]
    fn cache_stats(&self) -> (u64, u64) {
        let stats = self.inner.cache_stats();
        (stats.hits, stats.misses)
    }
}
