//! Python bindings for turbojet design-point performance.

use std::error::Error;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use turbojet_cycle::PerformanceError;

/// Converts a cycle error into a `ValueError` whose message includes its causes.
fn to_py_error(err: &PerformanceError) -> PyErr {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    PyValueError::new_err(message)
}

/// Evaluates a turbojet at its design point and returns `(ve, thrust)`.
///
/// `ve` is the exhaust velocity in m/s and `thrust` the specific thrust in
/// N·s/kg. Raises `ValueError` for out-of-range inputs or an infeasible cycle.
#[pyfunction]
fn evaluate_performance(
    pi_c: f64,
    tt4: f64,
    eta_c: f64,
    eta_t: f64,
    eta_n: f64,
    pi_b: f64,
) -> PyResult<(f64, f64)> {
    turbojet_cycle::evaluate_performance(pi_c, tt4, eta_c, eta_t, eta_n, pi_b)
        .map_err(|err| to_py_error(&err))
}

#[pymodule]
fn mc_turbojet(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_function(wrap_pyfunction!(evaluate_performance, m)?)?;
    Ok(())
}
