use ordered_float::OrderedFloat;
use tinypath::graph::Graph;
use tinypath::{input, Error, LinearScan, ShortestPathAlgorithm};

#[test]
fn loads_a_graph_from_json() {
    let text = r#"{
        "vertices": ["A", "B", "C"],
        "edges": [
            {"a": "A", "b": "B", "weight": 2.0},
            {"a": "B", "b": "C", "weight": 0.5}
        ]
    }"#;
    let graph = input::load_graph(text.as_bytes()).unwrap();
    assert_eq!(graph.vertex_count(), 3);

    let source = graph.lookup("A").unwrap();
    let result = LinearScan::new()
        .compute_shortest_paths(graph.graph(), source)
        .unwrap();
    let c = graph.lookup("C").unwrap();
    assert_eq!(result.distances[c], Some(OrderedFloat(2.5)));
}

#[test]
fn directed_edges_are_one_way() {
    let text = r#"{
        "vertices": ["A", "B"],
        "edges": [{"a": "A", "b": "B", "weight": 1.0}],
        "directed": true
    }"#;
    let graph = input::load_graph(text.as_bytes()).unwrap();

    let b = graph.lookup("B").unwrap();
    let result = LinearScan::new()
        .compute_shortest_paths(graph.graph(), b)
        .unwrap();
    let a = graph.lookup("A").unwrap();
    assert_eq!(result.distances[a], None, "arc must not be traversable backwards");
}

#[test]
fn negative_weight_is_rejected() {
    let text = r#"{
        "vertices": ["A", "B"],
        "edges": [{"a": "A", "b": "B", "weight": -1.0}]
    }"#;
    let err = input::load_graph(text.as_bytes()).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight(_)));
}

#[test]
fn unknown_endpoint_is_rejected() {
    let text = r#"{
        "vertices": ["A", "B"],
        "edges": [{"a": "A", "b": "Z", "weight": 1.0}]
    }"#;
    match input::load_graph(text.as_bytes()).unwrap_err() {
        Error::UnknownVertex(name) => assert_eq!(name, "Z"),
        other => panic!("expected UnknownVertex, got {:?}", other),
    }
}

#[test]
fn duplicate_vertex_is_rejected() {
    let text = r#"{"vertices": ["A", "A"], "edges": []}"#;
    match input::load_graph(text.as_bytes()).unwrap_err() {
        Error::DuplicateVertex(name) => assert_eq!(name, "A"),
        other => panic!("expected DuplicateVertex, got {:?}", other),
    }
}

#[test]
fn malformed_json_is_rejected() {
    let err = input::load_graph("not a graph".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn reference_graph_matches_the_demo() {
    let graph = input::reference_graph().unwrap();
    assert_eq!(graph.names(), &["A", "B", "C", "D", "E"][..]);
    // Seven undirected edges, stored once per direction.
    assert_eq!(graph.graph().edge_count(), 14);

    let a = graph.lookup("A").unwrap();
    let d = graph.lookup("D").unwrap();
    assert_eq!(graph.graph().edge_weight(a, d), Some(OrderedFloat(1.0)));
    assert_eq!(graph.graph().edge_weight(d, a), Some(OrderedFloat(1.0)));
}
