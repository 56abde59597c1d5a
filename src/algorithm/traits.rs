use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Zero;

use crate::graph::Graph;
use crate::Result;

/// A route found between two nodes
#[derive(Debug, Clone, PartialEq)]
pub struct Route<N, W> {
    /// Nodes from start to end, both included
    pub nodes: Vec<N>,

    /// Sum of edge weights along the route
    pub total_weight: W,

    /// Number of nodes settled before the end node was reached
    pub expanded: usize,
}

impl<N, W> Route<N, W> {
    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}

/// Trait for point-to-point route search algorithms
pub trait RouteSearch<N, W, G>
where
    N: Eq + Hash + Clone + Debug,
    W: Zero + Copy + PartialOrd + Debug,
    G: Graph<N, W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Find the lowest-weight route from `start` to `end`
    fn find_route(&self, graph: &G, start: &N, end: &N) -> Result<Route<N, W>>;

    /// Find the lowest-weight route as a plain node sequence
    fn find_path(&self, graph: &G, start: &N, end: &N) -> Result<Vec<N>> {
        self.find_route(graph, start, end).map(Route::into_nodes)
    }
}
