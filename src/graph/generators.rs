use crate::graph::{MutableGraph, UndirectedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Largest weight drawn by the random generators. Weights are small whole
/// numbers so that equal-weight paths (and therefore tie-breaks) are common.
pub const MAX_RANDOM_WEIGHT: u32 = 5;

fn random_weight(rng: &mut StdRng) -> OrderedFloat<f64> {
    OrderedFloat(rng.gen_range(1..=MAX_RANDOM_WEIGHT) as f64)
}

/// Generates a connected random graph with n nodes
///
/// A random spanning tree guarantees connectivity, then `extra_edges` further
/// edges are added between random distinct node pairs. For `n == 1` the graph
/// holds a single zero-weight self-loop on node 0, which counts as one edge.
pub fn generate_random_connected(
    n: usize,
    extra_edges: usize,
    seed: u64,
) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    assert!(n > 0, "n must be positive");

    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    if n == 1 {
        // Nodes only exist through edges, so the lone node gets a self-loop
        graph.add_edge(0, 0, OrderedFloat(0.0));
        return graph;
    }

    // Spanning tree: attach every node to a random earlier one
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let weight = random_weight(&mut rng);
        graph.add_edge(parent, v, weight);
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = random_weight(&mut rng);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random graph over nodes 0..n with up to `edge_count` edges
///
/// No connectivity is enforced, so some node pairs are usually unreachable.
/// Nodes that end up without edges do not exist in the returned graph.
pub fn generate_random(
    n: usize,
    edge_count: usize,
    seed: u64,
) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    assert!(n > 1, "n must be greater than 1");

    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..edge_count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = random_weight(&mut rng);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a width x height grid with unit weights (4-connectivity)
///
/// Node id is `row * width + column`.
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<usize, OrderedFloat<f64>> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let mut graph = UndirectedGraph::with_capacity(width * height);
    let index = |column: usize, row: usize| row * width + column;

    for row in 0..height {
        for column in 0..width {
            let current = index(column, row);
            if column + 1 < width {
                graph.add_edge(current, index(column + 1, row), OrderedFloat(1.0));
            }
            if row + 1 < height {
                graph.add_edge(current, index(column, row + 1), OrderedFloat(1.0));
            }
        }
    }

    // Nodes only exist through edges, so a 1x1 grid gets a zero-weight
    // self-loop. Node 0 then lists itself twice as a neighbor.
    if width * height == 1 {
        graph.add_edge(0, 0, OrderedFloat(0.0));
    }

    graph
}
