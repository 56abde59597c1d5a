pub mod traits;
pub mod config;
pub mod dijkstra;
pub mod search_state;

use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Graph, Weight};
use crate::Result;

pub use config::{FrontierStrategy, SearchConfig};
pub use dijkstra::PathFinder;
pub use traits::{Route, RouteSearch};

/// Shortest path from `start` to `end` using the default path finder
///
/// Returns the nodes in start-to-end order, or `Error::RouteNotPossible` if no
/// sequence of edges connects them. Integer weights whose path sums overflow
/// can also yield `Error::WeightOverflow`.
pub fn find_shortest_path<N, W, G>(graph: &G, start: &N, end: &N) -> Result<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    PathFinder::new().find_path(graph, start, end)
}
