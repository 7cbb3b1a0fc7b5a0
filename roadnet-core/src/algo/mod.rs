//! Public search entry points: isochrones and distance matrices over the
//! active network, plus their tabular and GeoJSON outputs.

pub mod isochrone;
pub mod matrix;
pub mod thresholds;
