use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tinypath::graph::{Graph, MutableGraph};
use tinypath::{input, AdjacencyGraph, Dijkstra, LinearScan, ShortestPathAlgorithm};

// Random graph with small integer weights so equal-distance ties actually
// occur and the tie-break contract gets exercised.
fn random_graph(rng: &mut StdRng, vertices: usize, edges: usize) -> AdjacencyGraph<OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_vertices(vertices);
    let mut added = 0;
    while added < edges {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        if a == b {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1..=10) as f64);
        graph.add_edge(a, b, weight).unwrap();
        added += 1;
    }
    graph
}

// Enumerates every simple path from `vertex`, tracking the best distance
// seen per vertex. Exponential, so only for tiny ground-truth graphs.
fn explore(
    graph: &AdjacencyGraph<OrderedFloat<f64>>,
    vertex: usize,
    distance: OrderedFloat<f64>,
    on_path: &mut Vec<bool>,
    best: &mut Vec<Option<OrderedFloat<f64>>>,
) {
    match best[vertex] {
        Some(current) if current <= distance => {}
        _ => best[vertex] = Some(distance),
    }
    on_path[vertex] = true;
    for (neighbor, weight) in graph.neighbors(vertex) {
        if !on_path[neighbor] {
            explore(graph, neighbor, distance + weight, on_path, best);
        }
    }
    on_path[vertex] = false;
}

#[test]
fn heap_and_scan_agree_on_the_reference_graph() {
    let graph = input::reference_graph().unwrap();
    let source = graph.lookup("A").unwrap();

    let scan = LinearScan::new()
        .compute_shortest_paths(graph.graph(), source)
        .unwrap();
    let heap = Dijkstra::new()
        .compute_shortest_paths(graph.graph(), source)
        .unwrap();

    assert_eq!(scan, heap);
}

#[test]
fn heap_and_scan_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(17);
    for round in 0..20 {
        let graph = random_graph(&mut rng, 30, 60);

        let scan = LinearScan::new().compute_shortest_paths(&graph, 0).unwrap();
        let heap = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(scan.distances, heap.distances, "round {}", round);
        assert_eq!(
            scan.predecessors, heap.predecessors,
            "tie-breaks must match, round {}",
            round
        );
    }
}

#[test]
fn matches_brute_force_on_small_graphs() {
    let mut rng = StdRng::seed_from_u64(99);
    for round in 0..10 {
        let graph = random_graph(&mut rng, 8, 12);

        let result = LinearScan::new().compute_shortest_paths(&graph, 0).unwrap();

        let mut best = vec![None; graph.vertex_count()];
        let mut on_path = vec![false; graph.vertex_count()];
        explore(&graph, 0, OrderedFloat(0.0), &mut on_path, &mut best);

        assert_eq!(result.distances, best, "round {}", round);
    }
}
