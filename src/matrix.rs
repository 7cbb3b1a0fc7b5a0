use pyo3::prelude::*;
use pyo3::types::PyDict;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use roadnet_core::prelude::*;

use crate::model::{PyGraphStore, resolve_workers, to_py_err};

/// Calculate shortest path costs between every origin and every target
///
/// Parameters
/// ----------
/// graph : GraphStore
///     Network to search, the active profile is used
/// origins, targets : list[int]
///     Node ids
/// mode : str, default="time"
///     "time" sums edge costs, "distance" sums edge lengths
/// workers : int, optional
///     Number of worker threads, defaults to the available parallelism
///
/// Returns
/// -------
/// dict
///     Columns ``start``, ``end`` and ``cost``, one row per origin/target
///     pair in origin-major order. Unreachable pairs are reported as
///     ``(-1, -1, inf)``.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (graph, origins, targets, mode = "time", workers = None))]
#[allow(clippy::needless_pass_by_value)]
pub fn distance_matrix<'py>(
    py: Python<'py>,
    graph: &PyGraphStore,
    origins: Vec<NodeId>,
    targets: Vec<NodeId>,
    mode: &str,
    workers: Option<usize>,
) -> PyResult<Bound<'py, PyDict>> {
    let mode: CostMode = mode.parse().map_err(to_py_err)?;
    let workers = resolve_workers(workers);

    let table = py.detach(|| {
        roadnet_core::distance_matrix(&graph.graph, &origins, &targets, mode, workers)
            .map(|rows| MatrixTable::new(&rows))
            .map_err(to_py_err)
    })?;

    let dict = PyDict::new(py);
    dict.set_item("start", table.start)?;
    dict.set_item("end", table.end)?;
    dict.set_item("cost", table.cost)?;
    Ok(dict)
}
