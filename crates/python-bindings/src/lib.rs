use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use lai_summarizer::{Config, InputPolicy, Strategy, SummarizeError};
use lai_summarizer::Summarizer as _;

fn to_py_err(e: SummarizeError) -> PyErr {
    PyErr::new::<PyValueError, _>(e.to_string())
}

fn parse_strategy(strategy: Option<&str>) -> PyResult<Strategy> {
    strategy
        .map(|s| s.parse::<Strategy>())
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(to_py_err)
}

/// Configurable summarizer; reuse one instance for many documents.
#[pyclass]
pub struct Summarizer {
    strategy: Strategy,
    config: Config,
}

#[pymethods]
impl Summarizer {
    #[new]
    #[pyo3(signature = (strategy=None, max_sentences=None, max_words=None))]
    fn new(strategy: Option<&str>, max_sentences: Option<usize>, max_words: Option<usize>) -> PyResult<Self> {
        let mut config = Config::default();
        if let Some(n) = max_sentences {
            config.summary_sentences = n;
        }
        if let Some(n) = max_words {
            config.truncate_words = n;
        }
        Ok(Summarizer {
            strategy: parse_strategy(strategy)?,
            config,
        })
    }

    #[getter]
    fn strategy(&self) -> &'static str {
        self.strategy.as_str()
    }

    fn summarize(&self, py: Python<'_>, text: &str) -> String {
        let summarizer = self.strategy.summarizer(&self.config);
        py.allow_threads(|| summarizer.summarize(text))
    }

    /// Summary text plus the selected sentences and sentence count
    fn summarize_document(&self, py: Python<'_>, text: &str) -> PyResult<PyObject> {
        let summarizer = self.strategy.summarizer(&self.config);
        let summary = py.allow_threads(|| summarizer.summarize_document(text));

        let dict = PyDict::new(py);
        dict.set_item("summary", summary.text)?;
        dict.set_item("selected", summary.selected)?;
        dict.set_item("strategy", summary.strategy.as_str())?;
        dict.set_item("sentence_count", summary.sentence_count)?;
        Ok(dict.into())
    }

    fn __repr__(&self) -> String {
        format!("Summarizer(strategy='{}')", self.strategy)
    }
}

/// Summarize `text` with the given strategy (default: frequency)
#[pyfunction]
#[pyo3(signature = (text, strategy=None))]
fn summarize(py: Python<'_>, text: &str, strategy: Option<&str>) -> PyResult<String> {
    let summarizer = parse_strategy(strategy)?.default_summarizer();
    Ok(py.allow_threads(|| summarizer.summarize(text)))
}

/// Trim `text` and check the minimum length; raises ValueError on failure
#[pyfunction]
#[pyo3(signature = (text, min_chars=50))]
fn validate(text: &str, min_chars: usize) -> PyResult<String> {
    InputPolicy::new(min_chars)
        .validate(text)
        .map(str::to_owned)
        .map_err(to_py_err)
}

#[pymodule]
fn lai_summarizer_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<Summarizer>()?;
    m.add_function(wrap_pyfunction!(summarize, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("__author__", "LAI Team")?;

    Ok(())
}
