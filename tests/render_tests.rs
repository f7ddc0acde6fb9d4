use ordered_float::OrderedFloat;
use tinypath::{input, render, LinearScan, NamedGraph, ShortestPathAlgorithm};

#[test]
fn reference_output_is_three_tab_separated_columns() {
    let graph = input::reference_graph().unwrap();
    let source = graph.lookup("A").unwrap();
    let result = LinearScan::new()
        .compute_shortest_paths(graph.graph(), source)
        .unwrap();

    let rendered = render::render_table(&graph, &result).unwrap();
    assert_eq!(rendered, "A\t0\t\nB\t3\tD\nC\t7\tE\nD\t1\tA\nE\t2\tD\n");
}

#[test]
fn unreached_vertices_render_inf_and_empty_predecessor() {
    let mut graph = NamedGraph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    graph.add_vertex("C").unwrap();
    graph.add_edge("A", "B", OrderedFloat(5.0)).unwrap();

    let source = graph.lookup("A").unwrap();
    let result = LinearScan::new()
        .compute_shortest_paths(graph.graph(), source)
        .unwrap();

    let rendered = render::render_table(&graph, &result).unwrap();
    assert_eq!(rendered, "A\t0\t\nB\t5\tA\nC\tinf\t\n");
}
