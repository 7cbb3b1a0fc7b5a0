use fixedbitset::FixedBitSet;
use log::debug;

use super::Profile;
use crate::NodeId;
use crate::model::{Edge, NetworkView, Node, Oneway, travel_minutes};

/// Walking speed in km/h
pub const FOOT_SPEED: f64 = 5.0;
/// Cycling speed on regular streets in km/h
pub const CYCLING_SPEED: f64 = 15.0;
/// Cycling speed on pedestrian-only segments in km/h
pub const FOOT_ONLY_CYCLING_SPEED: f64 = 4.0;
/// Segments faster than this (km/h) are closed to walking and cycling
pub const MOTORWAY_SPEED: f64 = 90.0;

pub(super) fn derive_view(profile: Profile, original: &NetworkView) -> NetworkView {
    let mut edges = Vec::with_capacity(original.edge_count());
    for edge in original.edges() {
        resolve_direction(rewrite_edge(profile, edge), &mut edges);
    }

    // Nodes still referenced by a surviving edge
    let mut referenced = FixedBitSet::with_capacity(original.node_count());
    for edge in &edges {
        referenced.insert(edge.from);
        referenced.insert(edge.to);
    }

    let mut remap: Vec<Option<NodeId>> = vec![None; original.node_count()];
    let mut nodes = Vec::with_capacity(referenced.count_ones(..));
    for old_id in referenced.ones() {
        let new_id = nodes.len();
        remap[old_id] = Some(new_id);
        let node = &original.nodes()[old_id];
        nodes.push(Node {
            id: new_id,
            x: node.x,
            y: node.y,
        });
    }

    for edge in &mut edges {
        // Both endpoints are marked in `referenced`, so both are remapped
        if let (Some(from), Some(to)) = (remap[edge.from], remap[edge.to]) {
            edge.from = from;
            edge.to = to;
        }
    }

    let dictionary = original.dictionary().remapped(&remap);

    debug!(
        "{profile} profile dropped {} nodes and produced {} edges from {}",
        original.node_count() - nodes.len(),
        edges.len(),
        original.edge_count()
    );

    NetworkView::from_parts(edges, nodes, dictionary)
}

/// Applies the profile's speed and direction rules to one edge
fn rewrite_edge(profile: Profile, edge: &Edge) -> Edge {
    let mut rewritten = edge.clone();
    match profile {
        Profile::Default => {}
        Profile::Foot => {
            rewritten.oneway = if edge.speed > MOTORWAY_SPEED {
                Oneway::Closed
            } else {
                Oneway::Both
            };
            rewritten.speed = FOOT_SPEED;
            rewritten.cost = travel_minutes(rewritten.length, rewritten.speed);
        }
        Profile::Bicycle => {
            if edge.speed > MOTORWAY_SPEED {
                rewritten.oneway = Oneway::Closed;
            }
            rewritten.speed = if edge.oneway == Oneway::FootOnly {
                FOOT_ONLY_CYCLING_SPEED
            } else {
                CYCLING_SPEED
            };
            rewritten.cost = travel_minutes(rewritten.length, rewritten.speed);
        }
        Profile::Car => {
            // Speed is unchanged, so is the cost
            if edge.oneway == Oneway::FootOnly {
                rewritten.oneway = Oneway::Closed;
            }
        }
    }
    rewritten
}

/// Turns an edge into the directed edges it stands for
fn resolve_direction(edge: Edge, out: &mut Vec<Edge>) {
    match edge.oneway {
        Oneway::Reverse => out.push(edge.reversed()),
        Oneway::Both => {
            let reversed = edge.reversed();
            out.push(edge);
            out.push(reversed);
        }
        Oneway::Closed => {}
        _ => out.push(edge),
    }
}
