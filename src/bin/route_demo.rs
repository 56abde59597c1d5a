use route_finder::graph::{Edge, Graph, UndirectedGraph};
use route_finder::{Error, PathFinder};
use std::env;
use std::fs;

/// Sample network used when no edge file is given
const SAMPLE_EDGES: &[(&str, &str, f64)] = &[
    ("X", "A", 7.0),
    ("X", "B", 2.0),
    ("X", "C", 3.0),
    ("X", "E", 4.0),
    ("A", "B", 3.0),
    ("A", "D", 4.0),
    ("B", "D", 4.0),
    ("B", "H", 5.0),
    ("C", "L", 2.0),
    ("D", "F", 1.0),
    ("F", "H", 3.0),
    ("G", "H", 2.0),
    ("G", "Y", 2.0),
    ("I", "J", 6.0),
    ("I", "K", 4.0),
    ("I", "L", 4.0),
    ("J", "L", 1.0),
    ("K", "Y", 5.0),
];

fn print_usage() {
    println!("Usage: route_demo [--edges <file.json>] [<start> <end>]");
    println!();
    println!("Edge files hold a JSON array of {{\"from\": .., \"to\": .., \"weight\": ..}}.");
    println!("Without --edges the built-in sample network is used; start/end default to X and Y.");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let mut edge_file = None;
    let mut endpoints = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--edges" => edge_file = args.next(),
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            _ => endpoints.push(arg),
        }
    }

    let start = endpoints.first().cloned().unwrap_or_else(|| "X".to_string());
    let end = endpoints.get(1).cloned().unwrap_or_else(|| "Y".to_string());

    let graph: UndirectedGraph<String, f64> = match &edge_file {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            let edges: Vec<Edge<String, f64>> = serde_json::from_str(&contents)?;
            UndirectedGraph::from_edges(edges)
        }
        None => UndirectedGraph::from_edges(
            SAMPLE_EDGES
                .iter()
                .map(|&(from, to, weight)| (from.to_string(), to.to_string(), weight)),
        ),
    };

    println!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let finder = PathFinder::new().with_weight_validation(true);
    match finder.find_route(&graph, &start, &end) {
        Ok(route) => {
            println!("{:?}", route.nodes);
            println!("Total weight: {}", route.total_weight);
        }
        Err(Error::RouteNotPossible) => println!("Route Not Possible"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
