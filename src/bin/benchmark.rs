use std::time::{Duration, Instant};
use rand::prelude::*;
use rand::rngs::StdRng;
use ordered_float::OrderedFloat;
use route_finder::graph::generators::generate_random_connected;
use route_finder::graph::{Graph, UndirectedGraph};
use route_finder::{FrontierStrategy, PathFinder, Route};

const QUERIES_PER_GRAPH: usize = 20;

// Run a batch of queries with one strategy and return the elapsed time and routes
fn benchmark_strategy(
    finder: &PathFinder,
    graph: &UndirectedGraph<usize, OrderedFloat<f64>>,
    queries: &[(usize, usize)],
) -> (Duration, Vec<Route<usize, OrderedFloat<f64>>>) {
    println!("Running {} on graph with {} nodes...", finder.name(), graph.node_count());

    let start = Instant::now();
    let routes: Vec<_> = queries
        .iter()
        .filter_map(|(from, to)| finder.find_route(graph, from, to).ok())
        .collect();
    let duration = start.elapsed();

    let expanded: usize = routes.iter().map(|route| route.expanded).sum();
    println!("  - {} routes, {} nodes expanded in {:?}", routes.len(), expanded, duration);

    (duration, routes)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![500, 1_000, 2_000, 5_000, 10_000];

    // Extra edges per node on top of the spanning tree
    let edge_factor = 2;

    println!("=====================================================");
    println!("Benchmark: linear scan vs binary heap frontier");
    println!("{} queries per graph, edge factor {}", QUERIES_PER_GRAPH, edge_factor);
    println!("=====================================================");

    let linear = PathFinder::new().with_strategy(FrontierStrategy::LinearScan);
    let heap = PathFinder::new().with_strategy(FrontierStrategy::BinaryHeap);

    let mut rng = StdRng::seed_from_u64(7);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random_connected(size, size * edge_factor, size as u64);
        let queries: Vec<(usize, usize)> = (0..QUERIES_PER_GRAPH)
            .map(|_| (rng.gen_range(0..size), rng.gen_range(0..size)))
            .collect();

        let (linear_time, linear_routes) = benchmark_strategy(&linear, &graph, &queries);
        let (heap_time, heap_routes) = benchmark_strategy(&heap, &graph, &queries);

        if linear_routes != heap_routes {
            println!("  ! strategies disagree on at least one route");
        }

        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("Speedup - binary heap vs linear scan: {:.2}x", speedup);

        results.push((size, graph.edge_count(), linear_time, heap_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
             "Nodes", "Edges", "Linear (ms)", "Heap (ms)", "Speedup");
    println!("-----------------------------------------------------");

    for (size, edges, linear_time, heap_time) in &results {
        let speedup = linear_time.as_secs_f64() / heap_time.as_secs_f64();
        println!("{:<10} | {:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
                 size,
                 edges,
                 linear_time.as_secs_f64() * 1000.0,
                 heap_time.as_secs_f64() * 1000.0,
                 speedup);
    }
}
