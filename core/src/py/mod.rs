// PyO3-bindinger (bygges kun med `--features python`).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use serde_json::{self as json, Value};
use serde_path_to_error as spte;

use crate::cli::{render_batch, run_batch};
use crate::dispatch::read_package;
use crate::metrics::Metrics;
use crate::types::BatchInput;
use crate::WorkoutError;

fn to_py_err(e: WorkoutError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// Enkeltpakke
// ──────────────────────────────────────────────────────────────────────────────

/// Rapport for én pakke som JSON-streng.
#[pyfunction]
fn read_package_json(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let report = read_package(workout_type, &data)
        .and_then(|w| w.training_info())
        .map_err(to_py_err)?;
    report
        .to_json()
        .map_err(|e| PyValueError::new_err(format!("serialize error: {e}")))
}

/// Ferdig formatert linje for én pakke.
#[pyfunction]
fn training_info_message(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let report = read_package(workout_type, &data)
        .and_then(|w| w.training_info())
        .map_err(to_py_err)?;
    Ok(report.message())
}

// ──────────────────────────────────────────────────────────────────────────────
// Batch
// ──────────────────────────────────────────────────────────────────────────────

/// Kjør en hel batch (`{"packages": [...], "cfg": {...}}`) og returner
/// `{"lines": [...], "failures": [...]}` som JSON.
#[pyfunction]
fn run_batch_json(json_in: &str) -> PyResult<String> {
    let mut de = json::Deserializer::from_str(json_in);
    let input: BatchInput = spte::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        PyValueError::new_err(format!("parse error (BatchInput) at {}: {}", path, e))
    })?;

    let metrics = Metrics::new().map_err(|e| PyValueError::new_err(e.to_string()))?;
    let outcome = run_batch(&input.packages, &input.cfg, &metrics);
    let lines = render_batch(&outcome, &input.cfg)
        .map_err(|e| PyValueError::new_err(format!("serialize error: {e}")))?;

    let failures = json::to_value(&outcome.failures)
        .map_err(|e| PyValueError::new_err(format!("serialize error: {e}")))?;
    let out = json::json!({ "lines": lines, "failures": failures });
    Ok(Value::to_string(&out))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn workout_stats_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_package_json, m)?)?;
    m.add_function(wrap_pyfunction!(training_info_message, m)?)?;
    m.add_function(wrap_pyfunction!(run_batch_json, m)?)?;
    Ok(())
}
