//! Error handling for Python bindings

use pyo3::{create_exception, exceptions::PyRuntimeError, PyErr};
use wbcorpus_core::CorpusError as RustCorpusError;

create_exception!(
    wbcorpus,
    CorpusError,
    PyRuntimeError,
    "Error while reading a dictionary or corpus"
);

/// Convert a Rust CorpusError to a Python exception
pub trait IntoPyErr {
    fn into_py_err(self) -> PyErr;
}

impl IntoPyErr for RustCorpusError {
    fn into_py_err(self) -> PyErr {
        CorpusError::new_err(self.to_string())
    }
}
