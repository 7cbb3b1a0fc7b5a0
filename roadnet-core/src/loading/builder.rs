use fixedbitset::FixedBitSet;
use log::info;

use super::config::{EdgeWeights, NetworkInput};
use crate::model::{Edge, GraphStore, NetworkView, Node, NodeDictionary, Oneway, travel_minutes};
use crate::{Error, NodeId};

/// Creates a graph store from columnar network data
///
/// # Errors
///
/// Returns `InconsistentTopology` if an edge references an unknown node or
/// a node is not part of any edge, and `InvalidData` for malformed columns
pub fn create_graph_store(input: &NetworkInput) -> Result<GraphStore, Error> {
    validate_columns(input)?;

    let dictionary = NodeDictionary::new(input.node_name.clone())?;
    let endpoints = resolve_endpoints(input, &dictionary)?;
    let edges = build_edges(&input.weights, endpoints);

    let nodes = input
        .node_x
        .iter()
        .zip(&input.node_y)
        .enumerate()
        .map(|(id, (&x, &y))| Node { id, x, y })
        .collect::<Vec<_>>();

    info!(
        "Built street network with {} nodes and {} edges (crs: '{}')",
        nodes.len(),
        edges.len(),
        input.crs
    );

    Ok(GraphStore::new(
        NetworkView::from_parts(edges, nodes, dictionary),
        input.crs.clone(),
    ))
}

fn validate_columns(input: &NetworkInput) -> Result<(), Error> {
    let edge_count = input.edge_from.len();
    let node_count = input.node_name.len();

    let mismatch = |column: &str, len: usize, expected: usize| {
        Error::InvalidData(format!(
            "Column '{column}' has {len} values, expected {expected}"
        ))
    };

    if input.edge_to.len() != edge_count {
        return Err(mismatch("edge_to", input.edge_to.len(), edge_count));
    }
    if input.node_x.len() != node_count {
        return Err(mismatch("node_x", input.node_x.len(), node_count));
    }
    if input.node_y.len() != node_count {
        return Err(mismatch("node_y", input.node_y.len(), node_count));
    }

    match &input.weights {
        EdgeWeights::Cost { cost, distance } => {
            if cost.len() != edge_count {
                return Err(mismatch("cost", cost.len(), edge_count));
            }
            if !distance.is_empty() && distance.len() != edge_count {
                return Err(mismatch("distance", distance.len(), edge_count));
            }
            if let Some(bad) = cost.iter().find(|c| !c.is_finite() || **c < 0.0) {
                return Err(Error::InvalidData(format!(
                    "Edge costs must be finite and non-negative, got {bad}"
                )));
            }
            if let Some(bad) = distance.iter().find(|d| !d.is_finite() || **d < 0.0) {
                return Err(Error::InvalidData(format!(
                    "Edge distances must be finite and non-negative, got {bad}"
                )));
            }
        }
        EdgeWeights::Speed {
            speed,
            length,
            oneway,
        } => {
            if speed.len() != edge_count {
                return Err(mismatch("speed", speed.len(), edge_count));
            }
            if length.len() != edge_count {
                return Err(mismatch("length", length.len(), edge_count));
            }
            if !oneway.is_empty() && oneway.len() != edge_count {
                return Err(mismatch("oneway", oneway.len(), edge_count));
            }
            if let Some(bad) = speed.iter().find(|s| !s.is_finite() || **s <= 0.0) {
                return Err(Error::InvalidData(format!(
                    "Edge speeds must be finite and positive, got {bad}"
                )));
            }
            if let Some(bad) = length.iter().find(|l| !l.is_finite() || **l < 0.0) {
                return Err(Error::InvalidData(format!(
                    "Edge lengths must be finite and non-negative, got {bad}"
                )));
            }
        }
    }

    Ok(())
}

/// Maps edge endpoint names to node ids and checks every node is used
fn resolve_endpoints(
    input: &NetworkInput,
    dictionary: &NodeDictionary,
) -> Result<Vec<(NodeId, NodeId)>, Error> {
    let lookup = |name: &str| {
        dictionary.id(name).ok_or_else(|| {
            Error::InconsistentTopology(format!("Edge references unknown node '{name}'"))
        })
    };

    let mut used = FixedBitSet::with_capacity(dictionary.len());
    let endpoints = input
        .edge_from
        .iter()
        .zip(&input.edge_to)
        .map(|(from, to)| {
            let from = lookup(from)?;
            let to = lookup(to)?;
            used.insert(from);
            used.insert(to);
            Ok((from, to))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if let Some(unused) = used.zeroes().next() {
        return Err(Error::InconsistentTopology(format!(
            "All nodes must be part of edges, node '{}' is not",
            dictionary.name(unused).unwrap_or_default()
        )));
    }

    Ok(endpoints)
}

fn build_edges(weights: &EdgeWeights, endpoints: Vec<(NodeId, NodeId)>) -> Vec<Edge> {
    match weights {
        EdgeWeights::Cost { cost, distance } => endpoints
            .into_iter()
            .enumerate()
            .map(|(i, (from, to))| {
                let length = distance.get(i).copied().unwrap_or(0.0);
                Edge {
                    from,
                    to,
                    cost: cost[i],
                    speed: implied_speed(length, cost[i]),
                    length,
                    oneway: Oneway::Forward,
                }
            })
            .collect(),
        EdgeWeights::Speed {
            speed,
            length,
            oneway,
        } => endpoints
            .into_iter()
            .enumerate()
            .map(|(i, (from, to))| Edge {
                from,
                to,
                cost: travel_minutes(length[i], speed[i]),
                speed: speed[i],
                length: length[i],
                oneway: oneway.get(i).map(String::as_str).map(Oneway::from).unwrap_or_default(),
            })
            .collect(),
    }
}

/// Speed in km/h that covers `length` meters in `cost` minutes
fn implied_speed(length: f64, cost: f64) -> f64 {
    if length > 0.0 && cost > 0.0 {
        (length / 1000.0) / (cost / 60.0)
    } else {
        0.0
    }
}
