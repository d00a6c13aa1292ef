use wgraph::{Distance, GraphError, NodeId, Weight, WeightedGraph};

fn chain_with_shortcut() -> WeightedGraph {
    // 1 -> 2 (1), 2 -> 3 (2), 1 -> 3 (10)
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 1).unwrap();
    graph.add_edge(2, 3, 2).unwrap();
    graph.add_edge(1, 3, 10).unwrap();
    graph
}

#[test]
fn test_idempotent_node_insertion() {
    let mut graph = WeightedGraph::new();
    graph.add_node(5);
    let before = graph.node_count();

    graph.add_node(7);
    graph.add_node(7);

    assert_eq!(graph.node_count(), before + 1);
    assert_eq!(graph.nodes().filter(|&n| n == NodeId(7)).count(), 1);
}

#[test]
fn test_edge_overwrite_is_last_write_wins() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(1, 2, 3).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight(1, 2), Some(3));
    assert_eq!(graph.render_adjacency_matrix().get(1, 2), Some(3));
}

#[test]
fn test_self_loop_terminates() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 1, 4).unwrap();
    graph.add_edge(1, 2, 6).unwrap();
    graph.add_edge(2, 2, 0).unwrap();

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.weight(1, 1), Some(4));

    let paths = graph.shortest_paths_from(1).unwrap();
    assert_eq!(paths.distance(1), Some(Distance::Finite(0)));
    assert_eq!(paths.distance(2), Some(Distance::Finite(6)));
}

#[test]
fn test_shortest_path_prefers_cheaper_detour() {
    let paths = chain_with_shortcut().shortest_paths_from(1).unwrap();

    let got: Vec<_> = paths.iter().collect();
    assert_eq!(
        got,
        vec![
            (NodeId(1), Distance::Finite(0)),
            (NodeId(2), Distance::Finite(1)),
            (NodeId(3), Distance::Finite(3)),
        ]
    );

    let route = paths.path_to(3).unwrap();
    assert_eq!(route.path, vec![NodeId(1), NodeId(2), NodeId(3)]);
    assert_eq!(route.cost, 3);
}

#[test]
fn test_unreachable_nodes_use_sentinel() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_node(9);

    let paths = graph.shortest_paths_from(1).unwrap();
    assert_eq!(paths.len(), 3);
    assert_eq!(paths.distance(9), Some(Distance::Unreachable));
    assert_eq!(paths.reachable_count(), 2);
    assert_eq!(graph.shortest_path(1, 9), Ok(None));
}

#[test]
fn test_edges_are_directed() {
    let paths = chain_with_shortcut().shortest_paths_from(3).unwrap();

    assert_eq!(paths.distance(3), Some(Distance::Finite(0)));
    assert_eq!(paths.distance(1), Some(Distance::Unreachable));
    assert_eq!(paths.distance(2), Some(Distance::Unreachable));
}

#[test]
fn test_source_distance_is_zero() {
    let mut graph = chain_with_shortcut();
    graph.add_edge(3, 1, 1).unwrap();

    for node in [1, 2, 3] {
        let paths = graph.shortest_paths_from(node).unwrap();
        assert_eq!(paths.distance(node), Some(Distance::Finite(0)));
        assert_eq!(paths.source(), NodeId::from(node));
    }
}

#[test]
fn test_unknown_source_is_rejected() {
    let graph = chain_with_shortcut();

    assert_eq!(
        graph.shortest_paths_from(42).unwrap_err(),
        GraphError::NodeNotFound(NodeId(42))
    );
    assert!(WeightedGraph::new().shortest_paths_from(1).is_err());
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph = chain_with_shortcut();
    let err = graph.add_edge(3, 4, -1).unwrap_err();

    assert!(matches!(err, GraphError::NegativeWeight { weight: -1, .. }));
    assert!(!graph.has_node(4));
    assert_eq!(graph.weight(3, 4), None);
}

#[test]
fn test_matrix_is_a_projection() {
    let graph = chain_with_shortcut();
    let matrix = graph.render_adjacency_matrix();

    for (i, &from) in matrix.nodes().iter().enumerate() {
        for (j, &to) in matrix.nodes().iter().enumerate() {
            assert_eq!(matrix.cell(i, j), graph.weight(from, to).unwrap_or(0));
        }
    }

    // Rendering twice yields the same result and leaves the graph untouched
    assert_eq!(graph.render_adjacency_matrix(), matrix);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_matrix_is_asymmetric() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 4).unwrap();
    graph.add_edge(2, 1, 7).unwrap();

    let matrix = graph.render_adjacency_matrix();
    assert_eq!(matrix.get(1, 2), Some(4));
    assert_eq!(matrix.get(2, 1), Some(7));
}

#[test]
fn test_matrix_uses_insertion_order() {
    let mut graph = WeightedGraph::new();
    graph.add_node(30);
    graph.add_edge(10, 20, 2).unwrap();

    let matrix = graph.render_adjacency_matrix();
    assert_eq!(matrix.nodes(), &[NodeId(30), NodeId(10), NodeId(20)]);
    assert_eq!(
        matrix.to_string(),
        "   30 10 20\n30  0  0  0\n10  0  0  2\n20  0  0  0\n"
    );
}

#[test]
fn test_zero_weight_edge_renders_as_zero() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 0).unwrap();

    assert_eq!(graph.weight(1, 2), Some(0));
    assert_eq!(graph.render_adjacency_matrix().get(1, 2), Some(0));

    let paths = graph.shortest_paths_from(1).unwrap();
    assert_eq!(paths.distance(2), Some(Distance::Finite(0)));
}

#[test]
fn test_negative_node_ids() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(-1, -2, 5).unwrap();

    let paths = graph.shortest_paths_from(-1).unwrap();
    assert_eq!(paths.distance(-2), Some(Distance::Finite(5)));
}

#[test]
fn test_max_weight_chain_reports_exact_distance() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, Weight::MAX).unwrap();
    graph.add_edge(2, 3, Weight::MAX).unwrap();
    graph.add_edge(3, 4, Weight::MAX).unwrap();

    let paths = graph.shortest_paths_from(1).unwrap();
    let expected = 3 * Weight::MAX as u64;
    assert_eq!(paths.distance(4), Some(Distance::Finite(expected)));
    assert_eq!(paths.path_to(4).unwrap().cost, expected);
}
