use log::debug;
use pyo3::exceptions::PyValueError;
use pyo3::{pyclass, pyfunction, pymethods, pymodule, types::PyModule, wrap_pyfunction};
use pyo3::{PyErr, PyResult, Python};

use crate::error::Error;
use crate::finder;
use crate::order::Order;
use crate::select::BoundedSelector;

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Keeps the top-k integers of a stream
#[pyclass(name = "TopK")]
pub struct PyTopK {
    selector: BoundedSelector<i64, Order>,
}

#[pymethods]
impl PyTopK {
    #[new]
    #[pyo3(signature = (capacity, smallest=false))]
    fn new(capacity: usize, smallest: bool) -> PyResult<Self> {
        let order = if smallest {
            Order::Smallest
        } else {
            Order::Largest
        };
        Ok(Self {
            selector: BoundedSelector::with_order(capacity, order)?,
        })
    }

    fn offer(&mut self, value: i64) {
        self.selector.offer(value)
    }

    fn offer_all(&mut self, values: Vec<i64>) {
        self.selector.offer_all(values)
    }

    /// Retained values, in heap order
    fn result(&self) -> Vec<i64> {
        self.selector.result().to_vec()
    }

    /// Retained values, best first
    fn sorted(&self) -> Vec<i64> {
        self.selector.clone().into_sorted_vec()
    }

    fn peek(&self) -> Option<i64> {
        self.selector.peek().copied()
    }

    fn threshold(&self) -> Option<i64> {
        self.selector.threshold().copied()
    }

    fn clear(&mut self) {
        self.selector.clear()
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.selector.capacity()
    }

    fn __len__(&self) -> usize {
        self.selector.len()
    }
}

#[pyfunction]
#[pyo3(name = "find_kth_largest")]
fn py_find_kth_largest(values: Vec<i64>, k: usize) -> PyResult<Option<i64>> {
    Ok(finder::find_kth_largest(values, k)?)
}

/// A Python module implemented in Rust.
#[pymodule]
fn bounded_select(_py: Python, module: &PyModule) -> PyResult<()> {
    // Init logging
    pyo3_log::init();
    debug!("Loading bounded-select extension");

    module.add_class::<PyTopK>()?;
    module.add_function(wrap_pyfunction!(py_find_kth_largest, module)?)?;

    Ok(())
}
