//! Route Finder - point-to-point shortest paths with Dijkstra's algorithm
//!
//! Graphs are undirected: every inserted edge is stored in both directions with
//! the same weight. Searches are greedy label-setting (Dijkstra) from a start node
//! until the end node is settled, and either return the ordered path or signal
//! [`Error::RouteNotPossible`].
//!
//! All edge weights must be non-negative. This is a precondition, not something
//! `add_edge` checks; see [`graph::Graph::validate_non_negative`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    find_shortest_path, FrontierStrategy, PathFinder, Route, RouteSearch, SearchConfig,
};
/// Re-export main types for convenient use
pub use graph::{Edge, Graph, MutableGraph, UndirectedGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No sequence of edges connects the start node to the end node
    #[error("Route Not Possible")]
    RouteNotPossible,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(String),

    /// Every route to the end node sums to more than the weight type can hold
    #[error("Route weight overflows the weight type")]
    WeightOverflow,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
