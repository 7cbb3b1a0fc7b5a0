use roadnet_core::prelude::*;
use roadnet_core::{EdgeTable, Oneway};

fn strings(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

/// Small town: a motorway, a footpath, a one-way street and two-way streets
fn town() -> GraphStore {
    let input = NetworkInput {
        edge_from: strings(&["hub", "hub", "park", "market", "school", "exit"]),
        edge_to: strings(&["exit", "park", "market", "school", "hub", "far"]),
        weights: EdgeWeights::Speed {
            speed: vec![110.0, 5.0, 30.0, 30.0, 50.0, 110.0],
            length: vec![5000.0, 300.0, 600.0, 800.0, 1200.0, 8000.0],
            oneway: strings(&["", "foot_only", "B", "TF", "", "B"]),
        },
        node_name: strings(&["hub", "exit", "park", "market", "school", "far"]),
        node_x: vec![0.0, 5000.0, 0.0, 500.0, 900.0, 13000.0],
        node_y: vec![0.0, 0.0, 300.0, 600.0, 0.0, 0.0],
        crs: "EPSG:32633".to_string(),
    };
    create_graph_store(&input).unwrap()
}

#[test]
fn test_construction_exposes_original_network() {
    let graph = town();
    assert_eq!(graph.active_profile(), Profile::Default);
    assert_eq!(graph.edges(), graph.original().edges());
    assert_eq!(graph.nodes().len(), 6);
    assert_eq!(graph.edges().len(), 6);
    assert_eq!(graph.crs(), "EPSG:32633");
    assert!(
        graph
            .nodes()
            .iter()
            .enumerate()
            .all(|(i, node)| node.id == i)
    );
}

#[test]
fn test_default_restores_original_after_any_profile() {
    let mut graph = town();
    let edges = graph.edge_table();
    let nodes = graph.node_table();
    let dictionary = graph.dictionary_table();

    for profile in [Profile::Foot, Profile::Bicycle, Profile::Car] {
        graph.activate(profile);
        assert_eq!(graph.active_profile(), profile);
        graph.activate(Profile::Default);
        assert_eq!(graph.edge_table(), edges);
        assert_eq!(graph.node_table(), nodes);
        assert_eq!(graph.dictionary_table(), dictionary);
        assert_eq!(graph.view(), graph.original());
    }
}

#[test]
fn test_activation_is_idempotent() {
    for profile in Profile::ALL {
        let mut once = town();
        once.activate(profile);

        let mut twice = town();
        twice.activate(profile);
        twice.activate(profile);

        assert_eq!(once.view(), twice.view(), "{profile} differs");
    }
}

#[test]
fn test_profiles_derive_from_original_not_previous_view() {
    let mut direct = town();
    direct.activate(Profile::Car);

    let mut chained = town();
    chained.activate(Profile::Foot);
    chained.activate(Profile::Bicycle);
    chained.activate(Profile::Car);

    assert_eq!(direct.view(), chained.view());
}

#[test]
fn test_active_view_is_consistent_for_every_profile() {
    let mut graph = town();
    for profile in Profile::ALL {
        graph.activate(profile);
        let node_count = graph.nodes().len();
        assert_eq!(graph.node_dict().len(), node_count);
        assert!(
            graph
                .nodes()
                .iter()
                .enumerate()
                .all(|(i, node)| node.id == i)
        );
        assert!(
            graph
                .edges()
                .iter()
                .all(|e| e.from < node_count && e.to < node_count && e.cost >= 0.0)
        );
    }
}

#[test]
fn test_foot_profile() {
    let mut graph = town();
    graph.activate(Profile::Foot);

    // Both motorway segments close, "exit" and "far" lose all their edges
    assert_eq!(graph.node_id("exit"), None);
    assert_eq!(graph.node_id("far"), None);
    assert_eq!(graph.nodes().len(), 4);
    // Four remaining segments, walkable both ways
    assert_eq!(graph.edges().len(), 8);
    assert!(graph.edges().iter().all(|e| e.speed == 5.0));

    // Remapped ids follow the original order of the surviving nodes
    let table = graph.dictionary_table();
    assert_eq!(table.name, strings(&["hub", "park", "market", "school"]));
    assert_eq!(table.id, vec![0, 1, 2, 3]);
}

#[test]
fn test_car_profile() {
    let mut graph = town();
    graph.activate(Profile::Car);

    // The footpath hub -> park is gone, park stays through the two-way street
    let hub = graph.node_id("hub").unwrap();
    let park = graph.node_id("park").unwrap();
    assert!(
        !graph
            .edges()
            .iter()
            .any(|e| e.from == hub && e.to == park)
    );
    assert!(!graph.edges().iter().any(|e| e.oneway == Oneway::FootOnly));

    // The "TF" street market -> school is only drivable school -> market
    let market = graph.node_id("market").unwrap();
    let school = graph.node_id("school").unwrap();
    assert!(
        graph
            .edges()
            .iter()
            .any(|e| e.from == school && e.to == market)
    );
    assert!(
        !graph
            .edges()
            .iter()
            .any(|e| e.from == market && e.to == school)
    );

    // 5 kept segments, the two "B" ones doubled
    assert_eq!(graph.edges().len(), 7);
    let table = EdgeTable::from(graph.view());
    assert_eq!(table.len(), 7);
}

#[test]
fn test_bicycle_profile() {
    let mut graph = town();
    graph.activate(Profile::Bicycle);

    assert_eq!(graph.node_id("far"), None);
    assert_eq!(graph.node_id("exit"), None);
    let hub = graph.node_id("hub").unwrap();
    let park = graph.node_id("park").unwrap();
    let footpath = graph
        .edges()
        .iter()
        .find(|e| e.from == hub && e.to == park)
        .unwrap();
    assert_eq!(footpath.speed, 4.0);
    assert!((footpath.cost - 4.5).abs() < 1e-9);
}

#[test]
fn test_invalid_profile_code_leaves_view_untouched() {
    let mut graph = town();
    graph.activate(Profile::Foot);
    let before = graph.view().clone();

    assert!(matches!(
        graph.activate_code(7),
        Err(Error::InvalidProfile(_))
    ));
    assert_eq!(graph.active_profile(), Profile::Foot);
    assert_eq!(graph.view(), &before);

    assert_eq!(graph.activate_code(3), Ok(Profile::Car));
    assert_eq!(graph.active_profile(), Profile::Car);
}

#[test]
fn test_snapshot_survives_activation() {
    let mut graph = town();
    let snapshot = graph.snapshot();
    graph.activate(Profile::Foot);
    assert_eq!(snapshot.node_count(), 6);
    assert_eq!(graph.nodes().len(), 4);
}

#[test]
fn test_nearest_node_follows_active_profile() {
    let mut graph = town();
    assert_eq!(graph.nearest_node(4900.0, 10.0), graph.node_id("exit"));

    graph.activate(Profile::Foot);
    // "exit" is gone, the closest walkable node is "school"
    assert_eq!(graph.nearest_node(4900.0, 10.0), graph.node_id("school"));
}
