use roadnet_core::prelude::*;
use roadnet_core::{ThresholdColumn, isochrones_to_geojson};

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

/// A -> B (1), B -> C (1), A -> D (5)
fn four_nodes() -> GraphStore {
    create_graph_store(&NetworkInput {
        edge_from: strings(&["A", "B", "A"]),
        edge_to: strings(&["B", "C", "D"]),
        weights: EdgeWeights::Cost {
            cost: vec![1.0, 1.0, 5.0],
            distance: vec![10.0, 10.0, 50.0],
        },
        node_name: strings(&["A", "B", "C", "D"]),
        node_x: vec![0.0, 1.0, 2.0, 0.0],
        node_y: vec![0.0, 0.0, 0.0, 5.0],
        crs: "EPSG:3857".to_string(),
    })
    .unwrap()
}

/// `size` x `size` grid of two-way 100 m streets at 30 km/h, under the car
/// profile so that every street is expanded in both directions
fn grid(size: usize) -> GraphStore {
    let name = |row: usize, col: usize| format!("{row}-{col}");
    let mut from = Vec::new();
    let mut to = Vec::new();
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                from.push(name(row, col));
                to.push(name(row, col + 1));
            }
            if row + 1 < size {
                from.push(name(row, col));
                to.push(name(row + 1, col));
            }
        }
    }
    let edge_count = from.len();
    let mut node_name = Vec::new();
    let mut node_x = Vec::new();
    let mut node_y = Vec::new();
    for row in 0..size {
        for col in 0..size {
            node_name.push(name(row, col));
            node_x.push(col as f64 * 100.0);
            node_y.push(row as f64 * 100.0);
        }
    }
    let mut graph = create_graph_store(&NetworkInput {
        edge_from: from,
        edge_to: to,
        weights: EdgeWeights::Speed {
            speed: vec![30.0; edge_count],
            length: vec![100.0; edge_count],
            oneway: vec!["B".to_string(); edge_count],
        },
        node_name,
        node_x,
        node_y,
        crs: "EPSG:3857".to_string(),
    })
    .unwrap();
    graph.activate(Profile::Car);
    graph
}

#[test]
fn test_isochrone_scenario() {
    let graph = four_nodes();
    let [a, b, c, d] = ["A", "B", "C", "D"].map(|n| graph.node_id(n).unwrap());
    let thresholds = Thresholds::new(vec![2.0, 10.0]).unwrap();

    let records = calculate_isochrones(&graph, &[a], &thresholds, 4).unwrap();
    let mut rows: Vec<_> = records
        .iter()
        .map(|r| (r.start_node, r.node, r.cost, r.threshold.unwrap()))
        .collect();
    rows.sort_by_key(|row| row.1);

    assert_eq!(
        rows,
        vec![
            (a, a, 0.0, 2.0),
            (a, b, 1.0, 2.0),
            (a, c, 2.0, 2.0),
            (a, d, 5.0, 10.0),
        ]
    );
}

#[test]
fn test_distance_matrix_scenario() {
    let graph = four_nodes();
    let a = graph.node_id("A").unwrap();
    let c = graph.node_id("C").unwrap();

    let rows = distance_matrix(&graph, &[a], &[c], CostMode::Time, 2).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0].start, a);
    assert_eq!(rows[0][0].end, c);
    assert_eq!(rows[0][0].cost, Some(2.0));
}

#[test]
fn test_every_origin_reports_itself_once_at_zero() {
    let graph = grid(5);
    let thresholds = Thresholds::new(vec![1.0, 3.0]).unwrap();
    let origins: Vec<NodeId> = (0..graph.nodes().len()).collect();
    let records = calculate_isochrones(&graph, &origins, &thresholds, 3).unwrap();

    for &origin in &origins {
        let own: Vec<_> = records
            .iter()
            .filter(|r| r.start_node == origin && r.node == origin)
            .collect();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].cost, 0.0);
        assert_eq!(own[0].threshold, Some(1.0));
    }
}

#[test]
fn test_isochrone_pairs_are_unique_and_bounded() {
    let graph = grid(6);
    let thresholds = Thresholds::new(vec![0.5, 1.0, 1.5]).unwrap();
    let origins = vec![0, 7, 20, 35];
    let records = calculate_isochrones(&graph, &origins, &thresholds, 2).unwrap();

    let mut pairs: Vec<_> = records.iter().map(|r| (r.start_node, r.node)).collect();
    let total = pairs.len();
    pairs.sort_unstable();
    pairs.dedup();
    assert_eq!(pairs.len(), total);

    for record in &records {
        assert!(record.cost <= thresholds.max());
        let threshold = record.threshold.unwrap();
        assert!(record.cost <= threshold);
    }
}

#[test]
fn test_isochrone_results_do_not_depend_on_worker_count() {
    let graph = grid(6);
    let thresholds = Thresholds::new(vec![1.0, 2.0]).unwrap();
    let origins: Vec<NodeId> = (0..36).step_by(5).collect();

    let sorted = |workers| {
        let mut records = calculate_isochrones(&graph, &origins, &thresholds, workers).unwrap();
        records.sort_by(|a, b| (a.start_node, a.node).cmp(&(b.start_node, b.node)));
        records
    };
    let single = sorted(1);
    for workers in [2, 3, 8] {
        assert_eq!(sorted(workers), single);
    }
}

#[test]
fn test_grid_isochrone_reaches_manhattan_ball() {
    let graph = grid(7);
    // 100 m at 30 km/h takes 0.2 minutes
    let thresholds = Thresholds::new(vec![0.45]).unwrap();
    let center = graph.node_id("3-3").unwrap();
    let records = calculate_isochrones(&graph, &[center], &thresholds, 1).unwrap();

    // Center plus every node within two blocks
    assert_eq!(records.len(), 13);
    for record in &records {
        let name = graph.node_name(record.node).unwrap();
        let (row, col) = name.split_once('-').unwrap();
        let (row, col): (i64, i64) = (row.parse().unwrap(), col.parse().unwrap());
        let blocks = (row - 3).abs() + (col - 3).abs();
        assert!((record.cost - blocks as f64 * 0.2).abs() < 1e-9);
    }
}

#[test]
fn test_diagonal_matrix_is_zero() {
    let graph = grid(4);
    let nodes: Vec<NodeId> = (0..16).collect();
    let rows = distance_matrix(&graph, &nodes, &nodes, CostMode::Time, 4).unwrap();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row[i].cost, Some(0.0));
        assert_eq!((row[i].start, row[i].end), (i, i));
    }
}

#[test]
fn test_grid_matrix_distances() {
    let graph = grid(4);
    let corner = graph.node_id("0-0").unwrap();
    let opposite = graph.node_id("3-3").unwrap();
    let rows =
        distance_matrix(&graph, &[corner], &[opposite], CostMode::Distance, 1).unwrap();
    assert_eq!(rows[0][0].cost, Some(600.0));

    let rows = distance_matrix(&graph, &[opposite], &[corner], CostMode::Time, 1).unwrap();
    let minutes = rows[0][0].cost.unwrap();
    assert!((minutes - 1.2).abs() < 1e-9);
}

#[test]
fn test_unreachable_targets_become_sentinels() {
    let graph = four_nodes();
    let c = graph.node_id("C").unwrap();
    let a = graph.node_id("A").unwrap();
    let rows = distance_matrix(&graph, &[c], &[a], CostMode::Time, 1).unwrap();
    assert!(!rows[0][0].is_reachable());

    let table = MatrixTable::new(&rows);
    assert_eq!((table.start[0], table.end[0]), (-1, -1));
    assert_eq!(table.cost[0], f64::INFINITY);
}

#[test]
fn test_searches_follow_active_profile() {
    let mut graph = create_graph_store(&NetworkInput {
        edge_from: strings(&["a", "b"]),
        edge_to: strings(&["b", "c"]),
        weights: EdgeWeights::Speed {
            speed: vec![30.0, 30.0],
            length: vec![1000.0, 1000.0],
            oneway: strings(&["", "foot_only"]),
        },
        node_name: strings(&["a", "b", "c"]),
        node_x: vec![0.0, 1000.0, 2000.0],
        node_y: vec![0.0, 0.0, 0.0],
        crs: String::new(),
    })
    .unwrap();
    let thresholds = Thresholds::new(vec![60.0]).unwrap();

    let records = calculate_isochrones(&graph, &[0], &thresholds, 1).unwrap();
    assert_eq!(records.len(), 3);

    graph.activate(Profile::Car);
    let records = calculate_isochrones(&graph, &[0], &thresholds, 1).unwrap();
    assert_eq!(records.len(), 2);
    assert!(matches!(
        calculate_isochrones(&graph, &[2], &thresholds, 1),
        Err(Error::InvalidNodeId(2))
    ));

    graph.activate(Profile::Foot);
    let c = graph.node_id("c").unwrap();
    let rows = distance_matrix(&graph, &[c], &[0], CostMode::Time, 1).unwrap();
    // Two kilometres on foot
    assert!((rows[0][0].cost.unwrap() - 24.0).abs() < 1e-9);
}

#[test]
fn test_labeled_thresholds_round_trip_into_table() {
    let graph = four_nodes();
    let thresholds = Thresholds::from_labels(&["2", "10"]).unwrap();
    let records = calculate_isochrones(&graph, &[0], &thresholds, 1).unwrap();
    let table = IsochroneTable::new(&records, &thresholds);

    let ThresholdColumn::Labels(labels) = table.threshold else {
        panic!("expected a label column");
    };
    let mut pairs: Vec<_> = table.node.into_iter().zip(labels).collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            (0, "2".to_string()),
            (1, "2".to_string()),
            (2, "2".to_string()),
            (3, "10".to_string()),
        ]
    );
}

#[test]
fn test_isochrone_geojson_features() {
    let graph = four_nodes();
    let thresholds = Thresholds::new(vec![10.0]).unwrap();
    let records = calculate_isochrones(&graph, &[0, 1], &thresholds, 2).unwrap();
    let collection = isochrones_to_geojson(&graph, &records).unwrap();
    assert_eq!(collection.features.len(), records.len());
    assert!(
        collection
            .features
            .iter()
            .all(|f| f.geometry.is_some() && f.properties.is_some())
    );
}
