//! PyO3 wrapper for VocabularySet

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use wbcorpus_core::{NormalizationForm, VocabularyBuilder, VocabularySet};

use crate::error::IntoPyErr;

/// Frequency-filtered vocabulary built from a dictionary file
#[pyclass(name = "Vocabulary", frozen)]
pub struct PyVocabulary {
    pub(crate) inner: Arc<VocabularySet>,
}

#[pymethods]
impl PyVocabulary {
    /// Build a vocabulary from a dictionary file
    ///
    /// `form` is one of "nfc", "nfd", "nfkc", "nfkd" or "none".
    #[staticmethod]
    #[pyo3(signature = (path, min_freq=5, lower=true, max_words=None, form="none"))]
    fn build(
        py: Python<'_>,
        path: PathBuf,
        min_freq: u64,
        lower: bool,
        max_words: Option<usize>,
        form: &str,
    ) -> PyResult<Self> {
        let form: NormalizationForm = form.parse().map_err(PyValueError::new_err)?;
        let builder = VocabularyBuilder::new()
            .min_freq(min_freq)
            .lower(lower)
            .max_words(max_words)
            .normalization_form(form);
        let inner = py
            .allow_threads(|| builder.build_file(&path))
            .map_err(|e| e.into_py_err())?;
        Ok(PyVocabulary {
            inner: Arc::new(inner),
        })
    }

    /// Aggregated dictionary count of a token, or None
    fn count(&self, token: &str) -> Option<u64> {
        self.inner.count(token)
    }

    /// Total word count from the dictionary's `t` line, if it had one
    #[getter]
    fn total_words(&self) -> Option<u64> {
        self.inner.total_words()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __contains__(&self, token: &str) -> bool {
        self.inner.contains(token)
    }

    fn __repr__(&self) -> String {
        format!("Vocabulary(size={})", self.inner.len())
    }
}
