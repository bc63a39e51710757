//! Python bindings for wbcorpus
//!
//! This module exposes vocabulary building and corpus streaming to Python,
//! shaped as the restartable sentence iterables gensim-style trainers take.

use pyo3::prelude::*;

mod corpus;
mod error;
mod vocabulary;

use corpus::{PyCorpus, PyCorpusIterator};
use vocabulary::PyVocabulary;

/// wbcorpus: annotated Wikipedia corpus streaming in Rust
#[pymodule]
fn wbcorpus(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyVocabulary>()?;
    m.add_class::<PyCorpus>()?;
    m.add_class::<PyCorpusIterator>()?;
    m.add("CorpusError", py.get_type_bound::<error::CorpusError>())?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
