//! Multi-source isochrones: every node reachable from an origin within the
//! largest threshold, with the threshold bucket each one falls into.

use geojson::{Feature, FeatureCollection, Geometry};
use log::info;
use serde::Serialize;
use serde_json::json;

use super::thresholds::Thresholds;
use crate::routing::dijkstra::bounded_dijkstra;
use crate::routing::{Adjacency, dispatch::dispatch};
use crate::{Cost, Error, GraphStore, NodeId};

/// One reached node of an isochrone
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsochroneRecord {
    pub start_node: NodeId,
    pub node: NodeId,
    pub cost: Cost,
    /// Smallest threshold covering `cost`
    pub threshold: Option<f64>,
}

/// Calculates isochrones around every origin on the active network.
///
/// Each origin yields a zero-cost record for itself, assigned to the
/// smallest threshold, followed by one record per node discovered within
/// the largest threshold. A node is reported with the cost it was first
/// discovered at, which can exceed its shortest path cost when a cheaper
/// path is found later in the search.
///
/// # Errors
///
/// Returns `InvalidNodeId` for origins outside the active network and
/// `InvalidData` / `ThreadPool` when the worker pool cannot be set up
pub fn calculate_isochrones(
    graph: &GraphStore,
    origins: &[NodeId],
    thresholds: &Thresholds,
    workers: usize,
) -> Result<Vec<IsochroneRecord>, Error> {
    let view = graph.view();
    view.validate_nodes(origins)?;

    let adjacency = Adjacency::new(view);
    let max_cost = thresholds.max();

    let per_origin = dispatch(origins, workers, |origin| {
        let reached = bounded_dijkstra(&adjacency, origin, max_cost);
        let mut records = Vec::with_capacity(reached.len() + 1);
        records.push(IsochroneRecord {
            start_node: origin,
            node: origin,
            cost: 0.0,
            threshold: Some(thresholds.min()),
        });
        records.extend(reached.into_iter().map(|(node, cost)| IsochroneRecord {
            start_node: origin,
            node,
            cost,
            threshold: thresholds.assign(cost),
        }));
        records
    })?;

    let records: Vec<IsochroneRecord> = per_origin.into_iter().flatten().collect();
    info!(
        "Isochrones from {} origins on the {} network reached {} nodes",
        origins.len(),
        graph.active_profile(),
        records.len()
    );
    Ok(records)
}

/// Threshold column of an isochrone table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ThresholdColumn {
    /// `NaN` marks records no threshold covers
    Values(Vec<f64>),
    /// Empty string marks records no threshold covers
    Labels(Vec<String>),
}

/// Columnar isochrone result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsochroneTable {
    pub start_node: Vec<NodeId>,
    pub node: Vec<NodeId>,
    pub cost: Vec<Cost>,
    pub threshold: ThresholdColumn,
}

impl IsochroneTable {
    /// Builds the table, reporting thresholds as labels when `thresholds`
    /// was created from labels
    pub fn new(records: &[IsochroneRecord], thresholds: &Thresholds) -> Self {
        let threshold = if thresholds.is_labeled() {
            ThresholdColumn::Labels(
                records
                    .iter()
                    .map(|r| {
                        r.threshold
                            .and_then(|t| thresholds.label_for(t))
                            .unwrap_or_default()
                            .to_string()
                    })
                    .collect(),
            )
        } else {
            ThresholdColumn::Values(
                records
                    .iter()
                    .map(|r| r.threshold.unwrap_or(f64::NAN))
                    .collect(),
            )
        };

        Self {
            start_node: records.iter().map(|r| r.start_node).collect(),
            node: records.iter().map(|r| r.node).collect(),
            cost: records.iter().map(|r| r.cost).collect(),
            threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty()
    }
}

/// Converts isochrone records to a `GeoJSON` `FeatureCollection` of reached
/// node points.
///
/// # Errors
///
/// Returns `InvalidNodeId` if a record references a node outside the active
/// network
pub fn isochrones_to_geojson(
    graph: &GraphStore,
    records: &[IsochroneRecord],
) -> Result<FeatureCollection, Error> {
    let features = records
        .iter()
        .map(|record| {
            let node = graph
                .view()
                .node(record.node)
                .ok_or(Error::InvalidNodeId(record.node))?;
            let value = json!({
                "type": "Feature",
                "geometry": Geometry::new((&node.geometry()).into()),
                "properties": {
                    "start_node": record.start_node,
                    "node": record.node,
                    "name": graph.node_name(record.node),
                    "cost": record.cost,
                    "threshold": record.threshold,
                }
            });
            serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    })
}

/// Same as [`isochrones_to_geojson`], serialized to a string
///
/// # Errors
///
/// See [`isochrones_to_geojson`]
pub fn isochrones_to_geojson_string(
    graph: &GraphStore,
    records: &[IsochroneRecord],
) -> Result<String, Error> {
    serde_json::to_string(&isochrones_to_geojson(graph, records)?)
        .map_err(|e| Error::GeoJsonError(e.to_string()))
}
