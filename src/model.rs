use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};
use roadnet_core::prelude::*;
use roadnet_core::{DictionaryTable, EdgeTable, NodeTable};

/// Maps engine errors onto Python exceptions: bad input becomes
/// `ValueError`, everything else `RuntimeError`.
pub(crate) fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::InconsistentTopology(_)
        | Error::InvalidProfile(_)
        | Error::InvalidNodeId(_)
        | Error::InvalidMode(_)
        | Error::InvalidData(_) => PyErr::new::<PyValueError, _>(error.to_string()),
        Error::ThreadPool(_) | Error::GeoJsonError(_) => {
            PyErr::new::<PyRuntimeError, _>(error.to_string())
        }
    }
}

/// Worker count for a search, defaulting to the available parallelism
pub(crate) fn resolve_workers(workers: Option<usize>) -> usize {
    workers.unwrap_or_else(|| DispatchConfig::default().workers)
}

/// GraphStore
///
/// A street network held in its original form plus the view derived for
/// the active routing profile. Searches always run on the active view.
///
/// Profiles:
///
/// - 0 / "default": the network as loaded
/// - 1 / "foot": walking at 5 km/h, motorways closed, one-way tags ignored
/// - 2 / "bicycle": cycling at 15 km/h, 4 km/h on footpaths
/// - 3 / "car": stored costs, footpaths closed, one-way tags honored
///
/// Example:
///
/// .. code-block:: python
///
///     graph = create_graph(edges_from, edges_to, names, xs, ys, speed=speed, length=length)
///     graph.activate_profile("foot")
///     table = calculate_isochrones(graph, [graph.node_id("hub")], [5, 10, 15])
#[cfg_attr(feature = "stubgen", gen_stub_pyclass)]
#[pyclass(name = "GraphStore")]
pub struct PyGraphStore {
    pub(crate) graph: GraphStore,
}

#[cfg_attr(feature = "stubgen", gen_stub_pymethods)]
#[pymethods]
impl PyGraphStore {
    /// Activates a routing profile given either its code (0-3) or its name.
    /// The active view is left untouched when the profile is unknown.
    pub fn activate_profile(&mut self, profile: &Bound<'_, PyAny>) -> PyResult<String> {
        let activated = if let Ok(code) = profile.extract::<i64>() {
            self.graph.activate_code(code).map_err(to_py_err)?
        } else {
            let name: String = profile.extract()?;
            let parsed = name.parse::<Profile>().map_err(to_py_err)?;
            self.graph.activate(parsed);
            parsed
        };
        Ok(activated.to_string())
    }

    #[getter]
    pub fn active_profile(&self) -> String {
        self.graph.active_profile().to_string()
    }

    #[getter]
    pub fn crs(&self) -> String {
        self.graph.crs().to_string()
    }

    pub fn node_count(&self) -> usize {
        self.graph.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edges().len()
    }

    /// Edge table of the active view as a dict of columns
    pub fn edges<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let EdgeTable {
            from,
            to,
            cost,
            speed,
            length,
            oneway,
        } = self.graph.edge_table();
        let dict = PyDict::new(py);
        dict.set_item("from", from)?;
        dict.set_item("to", to)?;
        dict.set_item("cost", cost)?;
        dict.set_item("speed", speed)?;
        dict.set_item("length", length)?;
        dict.set_item("oneway", oneway)?;
        Ok(dict)
    }

    /// Node table of the active view as a dict of columns
    pub fn nodes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let NodeTable { id, x, y } = self.graph.node_table();
        let dict = PyDict::new(py);
        dict.set_item("id", id)?;
        dict.set_item("x", x)?;
        dict.set_item("y", y)?;
        Ok(dict)
    }

    /// Name to id dictionary of the active view as a dict of columns
    pub fn node_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let DictionaryTable { name, id } = self.graph.dictionary_table();
        let dict = PyDict::new(py);
        dict.set_item("name", name)?;
        dict.set_item("id", id)?;
        Ok(dict)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.graph.node_id(name)
    }

    pub fn node_name(&self, id: NodeId) -> Option<String> {
        self.graph.node_name(id).map(ToString::to_string)
    }

    /// Resolves node names to ids of the active view.
    ///
    /// Raises
    /// ------
    /// ValueError
    ///     If a name is not part of the active view
    pub fn node_ids(&self, names: Vec<String>) -> PyResult<Vec<NodeId>> {
        self.graph.resolve_names(&names).map_err(to_py_err)
    }

    /// Id of the active node closest to the given coordinates
    pub fn nearest_node(&self, x: f64, y: f64) -> Option<NodeId> {
        self.graph.nearest_node(x, y)
    }

    fn __repr__(&self) -> String {
        format!(
            "GraphStore with {} nodes and {} edges ({} profile)",
            self.graph.nodes().len(),
            self.graph.edges().len(),
            self.graph.active_profile()
        )
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Create a graph store from columnar edge and node data
///
/// Edges reference nodes by name and every node has to be used by at
/// least one edge. Edge weights come either from ``speed`` and ``length``
/// (travel time in minutes is derived) or from precomputed ``cost``.
///
/// Parameters
/// ----------
/// edge_from, edge_to : list[str]
///     Names of the start and end node of every edge
/// node_name : list[str]
///     Unique node names, their position becomes the node id
/// node_x, node_y : list[float]
///     Node coordinates in a projected CRS
/// crs : str, default=""
///     Coordinate reference system label
/// speed : list[float], optional
///     Edge speeds in km/h
/// length : list[float], optional
///     Edge lengths in meters
/// oneway : list[str], optional
///     One-way tags ("", "B", "N", "TF", "foot_only")
/// cost : list[float], optional
///     Precomputed edge costs, used when ``speed`` is not given
/// distance : list[float], optional
///     Edge lengths accompanying ``cost``
///
/// Returns
/// -------
/// GraphStore
///     The loaded network with the default profile active
///
/// Raises
/// ------
/// ValueError
///     If columns are inconsistent or nodes and edges do not match up
///
/// Notes
/// -----
/// The function releases the GIL while the graph is built.
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction(name = "create_graph")]
#[pyo3(signature = (
    edge_from,
    edge_to,
    node_name,
    node_x,
    node_y,
    crs = String::new(),
    speed = None,
    length = None,
    oneway = None,
    cost = None,
    distance = None
))]
#[allow(clippy::too_many_arguments)]
pub fn py_create_graph(
    py: Python<'_>,
    edge_from: Vec<String>,
    edge_to: Vec<String>,
    node_name: Vec<String>,
    node_x: Vec<f64>,
    node_y: Vec<f64>,
    crs: String,
    speed: Option<Vec<f64>>,
    length: Option<Vec<f64>>,
    oneway: Option<Vec<String>>,
    cost: Option<Vec<f64>>,
    distance: Option<Vec<f64>>,
) -> PyResult<PyGraphStore> {
    let weights = match (speed, length, cost) {
        (Some(speed), Some(length), _) => EdgeWeights::Speed {
            speed,
            length,
            oneway: oneway.unwrap_or_default(),
        },
        (None, None, Some(cost)) => EdgeWeights::Cost {
            cost,
            distance: distance.unwrap_or_default(),
        },
        _ => {
            return Err(PyErr::new::<PyValueError, _>(
                "Either both speed and length or cost must be given",
            ));
        }
    };

    let input = NetworkInput {
        edge_from,
        edge_to,
        weights,
        node_name,
        node_x,
        node_y,
        crs,
    };

    py.detach(|| {
        let graph = create_graph_store(&input).map_err(to_py_err)?;
        Ok(PyGraphStore { graph })
    })
}
