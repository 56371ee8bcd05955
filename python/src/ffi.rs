//! Python surface over the core operations.
//!
//! - Decoders return `(a, b)` as `bytes`.
//! - Entry points return `(payload, cost)` where `cost` is a dict built from
//!   `CostSnapshot`.
//! - `ErrorKind` maps onto two `ValueError` subclasses.

use pyo3::create_exception;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use abi_split_core::constants::EXPORTED;
use abi_split_core::dual::{self, DualArray};
use abi_split_core::entry_points;
use abi_split_core::sink::MemorySink;
use abi_split_core::telemetry::{CostCounters, CostSnapshot};
use abi_split_core::types::{AbiError, ErrorKind};

create_exception!(abi_split, MalformedInputError, PyValueError);
create_exception!(abi_split, UnsupportedShapeError, PyValueError);

type PyPair<'py> = (Bound<'py, PyBytes>, Bound<'py, PyBytes>);
type PyEmission<'py> = (Bound<'py, PyBytes>, Bound<'py, PyDict>);

fn to_py_err(e: AbiError) -> PyErr {
    match e.kind() {
        ErrorKind::MalformedInput => MalformedInputError::new_err(e.to_string()),
        ErrorKind::UnsupportedShape => UnsupportedShapeError::new_err(e.to_string()),
    }
}

fn pair_to_py<'py>(py: Python<'py>, pair: DualArray<'_>) -> PyPair<'py> {
    (PyBytes::new_bound(py, pair.a), PyBytes::new_bound(py, pair.b))
}

fn cost_to_py<'py>(py: Python<'py>, cost: &CostCounters) -> PyResult<Bound<'py, PyDict>> {
    let snap = CostSnapshot::from_counters(cost);
    let d = PyDict::new_bound(py);
    d.set_item("words_read", snap.words_read)?;
    d.set_item("words_written", snap.words_written)?;
    d.set_item("bytes_viewed", snap.bytes_viewed)?;
    d.set_item("bytes_copied", snap.bytes_copied)?;
    d.set_item("padding_bytes", snap.padding_bytes)?;
    d.set_item("segments_skipped", snap.segments_skipped)?;
    d.set_item("padding_ratio", snap.padding_ratio)?;
    Ok(d)
}

/// Run one entry point against an in-memory sink and hand back what it emitted.
fn emit_with<'py, F>(py: Python<'py>, call: F) -> PyResult<PyEmission<'py>>
where
    F: FnOnce(&mut MemorySink) -> Result<CostCounters, AbiError>,
{
    let mut sink = MemorySink::new();
    let cost = call(&mut sink).map_err(to_py_err)?;
    let payload = sink
        .pop()
        .ok_or_else(|| PyRuntimeError::new_err("entry point emitted no payload"))?;
    Ok((PyBytes::new_bound(py, &payload), cost_to_py(py, &cost)?))
}

// -----------------------------------------------------------------------------
// Decoders
// -----------------------------------------------------------------------------

#[pyfunction]
fn decode_packed<'py>(py: Python<'py>, buf: &[u8]) -> PyResult<PyPair<'py>> {
    let pair = dual::decode(buf).map_err(to_py_err)?;
    Ok(pair_to_py(py, pair))
}

#[pyfunction]
fn decode_packed_optimized<'py>(py: Python<'py>, buf: &[u8]) -> PyResult<PyPair<'py>> {
    let pair = dual::decode_optimized(buf).map_err(to_py_err)?;
    Ok(pair_to_py(py, pair))
}

#[pyfunction]
fn reencode<'py>(py: Python<'py>, a: &[u8], b: &[u8]) -> Bound<'py, PyBytes> {
    PyBytes::new_bound(py, &dual::reencode(a, b))
}

// -----------------------------------------------------------------------------
// Entry points
// -----------------------------------------------------------------------------

#[pyfunction]
fn from_packed<'py>(py: Python<'py>, buf: &[u8]) -> PyResult<PyEmission<'py>> {
    emit_with(py, |sink| entry_points::from_packed(buf, sink))
}

#[pyfunction]
fn from_packed_optimized<'py>(py: Python<'py>, buf: &[u8]) -> PyResult<PyEmission<'py>> {
    emit_with(py, |sink| entry_points::from_packed_optimized(buf, sink))
}

#[pyfunction]
fn from_separate<'py>(py: Python<'py>, a: &[u8], b: &[u8]) -> PyResult<PyEmission<'py>> {
    emit_with(py, |sink| Ok(entry_points::from_separate(a, b, sink)))
}

#[pyfunction]
fn from_packed_with_empty_skip<'py>(py: Python<'py>, buf: &[u8]) -> PyResult<PyEmission<'py>> {
    emit_with(py, |sink| entry_points::from_packed_with_empty_skip(buf, sink))
}

#[pyfunction]
fn from_separate_with_empty_skip<'py>(
    py: Python<'py>,
    a: &[u8],
    b: &[u8],
) -> PyResult<PyEmission<'py>> {
    emit_with(py, |sink| Ok(entry_points::from_separate_with_empty_skip(a, b, sink)))
}

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(decode_packed, m)?)?;
    m.add_function(wrap_pyfunction!(decode_packed_optimized, m)?)?;
    m.add_function(wrap_pyfunction!(reencode, m)?)?;

    m.add_function(wrap_pyfunction!(from_packed, m)?)?;
    m.add_function(wrap_pyfunction!(from_packed_optimized, m)?)?;
    m.add_function(wrap_pyfunction!(from_separate, m)?)?;
    m.add_function(wrap_pyfunction!(from_packed_with_empty_skip, m)?)?;
    m.add_function(wrap_pyfunction!(from_separate_with_empty_skip, m)?)?;

    m.add("MalformedInputError", py.get_type_bound::<MalformedInputError>())?;
    m.add("UnsupportedShapeError", py.get_type_bound::<UnsupportedShapeError>())?;

    for (name, value) in EXPORTED {
        m.add(name, value)?;
    }
    Ok(())
}
