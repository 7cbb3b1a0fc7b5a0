use pyo3::prelude::*;
use pyo3::types::PyDict;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use roadnet_core::prelude::*;
use roadnet_core::{IsochroneTable, ThresholdColumn, isochrones_to_geojson_string};

use crate::model::{PyGraphStore, resolve_workers, to_py_err};

/// Thresholds are either numbers or labels holding numbers; labels are
/// reported back verbatim in the result.
fn extract_thresholds(thresholds: &Bound<'_, PyAny>) -> PyResult<Thresholds> {
    if let Ok(values) = thresholds.extract::<Vec<f64>>() {
        return Thresholds::new(values).map_err(to_py_err);
    }
    let labels: Vec<String> = thresholds.extract()?;
    Thresholds::from_labels(&labels).map_err(to_py_err)
}

/// Calculate isochrones around a set of origin nodes
///
/// Every origin reaches itself at cost 0, followed by each node reached
/// within the largest threshold. Nodes are assigned to the smallest
/// threshold that covers their cost.
///
/// Parameters
/// ----------
/// graph : GraphStore
///     Network to search, the active profile is used
/// origins : list[int]
///     Origin node ids
/// thresholds : list[float] | list[str]
///     Cost thresholds, labels are parsed as numbers and echoed back
/// workers : int, optional
///     Number of worker threads, defaults to the available parallelism
///
/// Returns
/// -------
/// dict
///     Columns ``start_node``, ``node``, ``cost`` and ``threshold``
///
/// Raises
/// ------
/// ValueError
///     If thresholds are empty or invalid, or an origin is unknown
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (graph, origins, thresholds, workers = None))]
#[allow(clippy::needless_pass_by_value)]
pub fn calculate_isochrones<'py>(
    py: Python<'py>,
    graph: &PyGraphStore,
    origins: Vec<NodeId>,
    thresholds: &Bound<'py, PyAny>,
    workers: Option<usize>,
) -> PyResult<Bound<'py, PyDict>> {
    let thresholds = extract_thresholds(thresholds)?;
    let workers = resolve_workers(workers);

    let table = py.detach(|| {
        roadnet_core::calculate_isochrones(&graph.graph, &origins, &thresholds, workers)
            .map(|records| IsochroneTable::new(&records, &thresholds))
            .map_err(to_py_err)
    })?;

    let dict = PyDict::new(py);
    dict.set_item("start_node", table.start_node)?;
    dict.set_item("node", table.node)?;
    dict.set_item("cost", table.cost)?;
    match table.threshold {
        ThresholdColumn::Values(values) => dict.set_item("threshold", values)?,
        ThresholdColumn::Labels(labels) => dict.set_item("threshold", labels)?,
    }
    Ok(dict)
}

/// Calculate isochrones and return them as a GeoJSON FeatureCollection of
/// reached node points
///
/// Parameters are the same as for ``calculate_isochrones``.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
#[pyo3(signature = (graph, origins, thresholds, workers = None))]
#[allow(clippy::needless_pass_by_value)]
pub fn isochrones_geojson(
    py: Python<'_>,
    graph: &PyGraphStore,
    origins: Vec<NodeId>,
    thresholds: &Bound<'_, PyAny>,
    workers: Option<usize>,
) -> PyResult<String> {
    let thresholds = extract_thresholds(thresholds)?;
    let workers = resolve_workers(workers);

    py.detach(|| {
        let records =
            roadnet_core::calculate_isochrones(&graph.graph, &origins, &thresholds, workers)
                .map_err(to_py_err)?;
        isochrones_to_geojson_string(&graph.graph, &records).map_err(to_py_err)
    })
}
