use route_finder::graph::generators::{generate_grid, generate_random_connected};
use route_finder::graph::{Graph, MutableGraph, UndirectedGraph};
use route_finder::{find_shortest_path, Error};

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph: UndirectedGraph<&str, u32> = UndirectedGraph::new();
    graph.add_edge("A", "B", 7);

    assert_eq!(graph.neighbors(&"A").collect::<Vec<_>>(), vec![&"B"]);
    assert_eq!(graph.neighbors(&"B").collect::<Vec<_>>(), vec![&"A"]);
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(7));
    assert_eq!(graph.edge_weight(&"B", &"A"), Some(7));
    assert!(graph.has_edge(&"B", &"A"));
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let mut graph: UndirectedGraph<&str, u32> = UndirectedGraph::new();
    graph.add_edge("X", "A", 7);
    graph.add_edge("X", "B", 2);
    graph.add_edge("C", "X", 3);

    assert_eq!(graph.neighbors(&"X").copied().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec!["X", "A", "B", "C"]);
}

#[test]
fn test_duplicate_edges_are_not_deduplicated() {
    let mut graph: UndirectedGraph<&str, u32> = UndirectedGraph::new();
    graph.add_edge("A", "B", 5);
    graph.add_edge("A", "B", 3);

    assert_eq!(graph.neighbors(&"A").count(), 2);
    assert_eq!(graph.neighbors(&"B").count(), 2);
    assert_eq!(graph.edge_weight(&"A", &"B"), Some(3), "latest weight wins");
    assert_eq!(graph.edge_weight(&"B", &"A"), Some(3));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_reverse_insertion_overwrites_both_directions() {
    let mut graph: UndirectedGraph<&str, f64> = UndirectedGraph::new();
    graph.add_edge("A", "B", 5.0);
    graph.add_edge("B", "A", 1.5);

    assert_eq!(graph.edge_weight(&"A", &"B"), Some(1.5));
    assert_eq!(graph.edge_weight(&"B", &"A"), Some(1.5));
}

#[test]
fn test_unknown_node() {
    let mut graph: UndirectedGraph<&str, u32> = UndirectedGraph::new();
    graph.add_edge("A", "B", 1);

    assert!(!graph.contains_node(&"Z"));
    assert_eq!(graph.neighbors(&"Z").count(), 0);
    assert_eq!(graph.edge_weight(&"A", &"Z"), None);
    assert!(!graph.has_edge(&"Z", &"A"));
}

#[test]
fn test_nodes_only_exist_through_edges() {
    let graph: UndirectedGraph<u32, u32> = UndirectedGraph::default();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.validate_non_negative().is_ok());
}

#[test]
fn test_validate_non_negative() {
    let mut graph: UndirectedGraph<&str, f64> = UndirectedGraph::new();
    graph.add_edge("A", "B", 0.0);
    graph.add_edge("B", "C", 2.5);
    assert!(graph.validate_non_negative().is_ok());

    graph.add_edge("C", "D", -0.5);
    assert_eq!(
        graph.validate_non_negative(),
        Err(Error::NegativeWeight("-0.5".to_string()))
    );
}

#[test]
fn test_grid_generator_shape() {
    let graph = generate_grid(4, 3);

    assert_eq!(graph.node_count(), 12);
    // (width - 1) * height horizontal + width * (height - 1) vertical
    assert_eq!(graph.edge_count(), 3 * 3 + 4 * 2);
    assert_eq!(graph.neighbors(&0).count(), 2, "corner has two neighbors");
    assert_eq!(graph.neighbors(&5).count(), 4, "interior has four neighbors");
}

#[test]
fn test_random_connected_generator_is_connected_and_seeded() {
    let graph = generate_random_connected(50, 20, 1);
    let again = generate_random_connected(50, 20, 1);

    assert_eq!(graph.node_count(), 50);
    for node in 1..50usize {
        assert!(find_shortest_path(&graph, &0usize, &node).is_ok(), "node {} unreachable", node);
        assert_eq!(
            graph.neighbors(&node).collect::<Vec<_>>(),
            again.neighbors(&node).collect::<Vec<_>>(),
            "same seed should give the same graph"
        );
    }
}

#[test]
fn test_single_node_generators_use_a_self_loop() {
    for graph in [generate_random_connected(1, 3, 7), generate_grid(1, 1)] {
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&0).collect::<Vec<_>>(), vec![&0, &0]);
        assert_eq!(find_shortest_path(&graph, &0usize, &0usize).unwrap(), vec![0]);
    }
}
