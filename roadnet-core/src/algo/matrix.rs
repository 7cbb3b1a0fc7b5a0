//! Origin x target shortest path cost matrices

use log::info;
use serde::Serialize;

use crate::model::CostMode;
use crate::routing::astar::astar_cost;
use crate::routing::{Adjacency, dispatch::dispatch};
use crate::{Cost, Error, GraphStore, NodeId};

/// One origin/target pair of a distance matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixCell {
    pub start: NodeId,
    pub end: NodeId,
    /// `None` if `end` cannot be reached from `start`
    pub cost: Option<Cost>,
}

impl MatrixCell {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

/// Calculates shortest path costs from every origin to every target on the
/// active network, one row per origin and one cell per target.
///
/// `mode` selects whether edge costs or edge lengths are summed up.
///
/// # Errors
///
/// Returns `InvalidNodeId` for origins or targets outside the active network
/// and `InvalidData` / `ThreadPool` when the worker pool cannot be set up
pub fn distance_matrix(
    graph: &GraphStore,
    origins: &[NodeId],
    targets: &[NodeId],
    mode: CostMode,
    workers: usize,
) -> Result<Vec<Vec<MatrixCell>>, Error> {
    let view = graph.view();
    view.validate_nodes(origins)?;
    view.validate_nodes(targets)?;

    let adjacency = Adjacency::new(view);
    let nodes = view.nodes();

    let rows = dispatch(origins, workers, |origin| {
        targets
            .iter()
            .map(|&target| MatrixCell {
                start: origin,
                end: target,
                cost: astar_cost(&adjacency, nodes, origin, target, mode),
            })
            .collect::<Vec<_>>()
    })?;

    info!(
        "Computed {}x{} {mode} matrix on the {} network",
        origins.len(),
        targets.len(),
        graph.active_profile()
    );
    Ok(rows)
}

/// Columnar distance matrix. Unreachable pairs are reported as
/// `(-1, -1, inf)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixTable {
    pub start: Vec<i64>,
    pub end: Vec<i64>,
    pub cost: Vec<f64>,
}

impl MatrixTable {
    pub const UNREACHABLE: (i64, i64, f64) = (-1, -1, f64::INFINITY);

    pub fn new(rows: &[Vec<MatrixCell>]) -> Self {
        let mut table = MatrixTable::default();
        for cell in rows.iter().flatten() {
            let (start, end, cost) = match cell.cost {
                Some(cost) => (to_i64(cell.start), to_i64(cell.end), cost),
                None => Self::UNREACHABLE,
            };
            table.start.push(start);
            table.end.push(end);
            table.cost.push(cost);
        }
        table
    }

    pub fn len(&self) -> usize {
        self.cost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost.is_empty()
    }
}

fn to_i64(id: NodeId) -> i64 {
    i64::try_from(id).unwrap_or(i64::MAX)
}
