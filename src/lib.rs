use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::define_stub_info_gatherer;

use isochrone::{calculate_isochrones, isochrones_geojson};
use matrix::distance_matrix;
use model::{PyGraphStore, py_create_graph};

pub mod isochrone;
pub mod matrix;
pub mod model;

/// A Python module implemented in Rust.
#[pymodule]
fn roadnet(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PyGraphStore>()?;
    m.add_function(wrap_pyfunction!(py_create_graph, m)?)?;

    m.add_function(wrap_pyfunction!(calculate_isochrones, m)?)?;
    m.add_function(wrap_pyfunction!(isochrones_geojson, m)?)?;

    m.add_function(wrap_pyfunction!(distance_matrix, m)?)?;
    Ok(())
}

#[cfg(feature = "stubgen")]
define_stub_info_gatherer!(stub_info);
