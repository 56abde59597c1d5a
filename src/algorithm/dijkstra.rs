use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace, warn};

use crate::algorithm::config::{FrontierStrategy, SearchConfig};
use crate::algorithm::search_state::{Relaxation, SearchState};
use crate::algorithm::{Route, RouteSearch};
use crate::data_structures::FrontierQueue;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm, stopped as soon as the end node is settled
///
/// The finder itself holds only configuration; every search owns its own
/// state, so one finder can serve any number of queries.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: SearchConfig,
}

impl PathFinder {
    /// Creates a path finder using the linear-scan frontier
    pub fn new() -> Self {
        PathFinder::default()
    }

    /// Creates a path finder from a complete configuration
    pub fn with_config(config: SearchConfig) -> Self {
        PathFinder { config }
    }

    /// Set the frontier selection strategy
    pub fn with_strategy(mut self, strategy: FrontierStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Check for negative weights before each search
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.config.validate_weights = enabled;
        self
    }

    /// Returns the active configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn name(&self) -> &'static str {
        match self.config.strategy {
            FrontierStrategy::LinearScan => "Dijkstra (linear scan)",
            FrontierStrategy::BinaryHeap => "Dijkstra (binary heap)",
        }
    }

    /// Find the lowest-weight route from `start` to `end`
    ///
    /// Returns `Error::RouteNotPossible` when the frontier runs dry before `end`
    /// is settled, or `Error::WeightOverflow` if it ran dry only after dropping
    /// path weights too large for `W`. `start == end` always yields the
    /// single-node route.
    pub fn find_route<N, W, G>(&self, graph: &G, start: &N, end: &N) -> Result<Route<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
        G: Graph<N, W>,
    {
        if self.config.validate_weights {
            graph.validate_non_negative()?;
        }

        debug!(
            "Searching route {:?} -> {:?} ({} nodes, {} edges, {:?})",
            start,
            end,
            graph.node_count(),
            graph.edge_count(),
            self.config.strategy
        );

        let state = match self.config.strategy {
            FrontierStrategy::LinearScan => self.search_linear(graph, start, end),
            FrontierStrategy::BinaryHeap => self.search_heap(graph, start, end),
        };

        let state = match state {
            Ok(state) => state,
            Err(err) => {
                debug!("No route {:?} -> {:?}: {}", start, end, err);
                return Err(err);
            }
        };

        let nodes = state.path_to(end);
        let total_weight = state.weight_of(end).ok_or(Error::RouteNotPossible)?;
        let route = Route {
            nodes,
            total_weight,
            expanded: state.visited_count(),
        };

        debug!(
            "Route found: {} hops, total weight {:?}, {} nodes expanded",
            route.hops(),
            route.total_weight,
            route.expanded
        );

        Ok(route)
    }

    /// Find the lowest-weight route as a plain node sequence
    pub fn find_path<N, W, G>(&self, graph: &G, start: &N, end: &N) -> Result<Vec<N>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
        G: Graph<N, W>,
    {
        self.find_route(graph, start, end).map(Route::into_nodes)
    }

    /// Settles `current` and relaxes all of its edges in neighbor order,
    /// reporting every discovery or improvement to `on_update`
    fn expand<N, W, G, F>(
        &self,
        graph: &G,
        state: &mut SearchState<N, W>,
        current: &N,
        mut on_update: F,
    ) -> Result<()>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
        G: Graph<N, W>,
        F: FnMut(&N, W, usize),
    {
        let base = state.settle(current).ok_or(Error::RouteNotPossible)?;
        trace!("Settled {:?} at {:?}", current, base);

        for neighbor in graph.neighbors(current) {
            let Some(weight) = graph.edge_weight(current, neighbor) else {
                warn!("Missing weight for edge {:?} -> {:?}, skipping", current, neighbor);
                continue;
            };

            let Some(candidate) = base.checked_sum(weight) else {
                warn!("Weight overflow on edge {:?} -> {:?}, skipping", current, neighbor);
                state.note_overflow();
                continue;
            };

            match state.relax(current, neighbor, candidate) {
                Relaxation::Discovered { weight, sequence }
                | Relaxation::Improved { weight, sequence } => on_update(neighbor, weight, sequence),
                Relaxation::Unchanged => {}
            }
        }

        Ok(())
    }

    fn search_linear<N, W, G>(&self, graph: &G, start: &N, end: &N) -> Result<SearchState<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
        G: Graph<N, W>,
    {
        let mut state = SearchState::new(start.clone());
        let mut current = start.clone();

        while current != *end {
            self.expand(graph, &mut state, &current, |_, _, _| {})?;
            current = state.cheapest_unvisited().ok_or_else(|| state.exhausted())?;
        }

        Ok(state)
    }

    fn search_heap<N, W, G>(&self, graph: &G, start: &N, end: &N) -> Result<SearchState<N, W>>
    where
        N: Eq + Hash + Clone + Debug,
        W: Weight,
        G: Graph<N, W>,
    {
        let mut state = SearchState::new(start.clone());
        let mut queue = FrontierQueue::new();
        let mut current = start.clone();

        while current != *end {
            self.expand(graph, &mut state, &current, |node, weight, sequence| {
                queue.push(node.clone(), weight, sequence);
            })?;

            current = loop {
                let (node, weight, _) = queue.pop().ok_or_else(|| state.exhausted())?;
                // Skip entries superseded by a later improvement
                if !state.is_visited(&node) && state.weight_of(&node) == Some(weight) {
                    break node;
                }
            };
        }

        Ok(state)
    }
}

impl<N, W, G> RouteSearch<N, W, G> for PathFinder
where
    N: Eq + Hash + Clone + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        PathFinder::name(self)
    }

    fn find_route(&self, graph: &G, start: &N, end: &N) -> Result<Route<N, W>> {
        PathFinder::find_route(self, graph, start, end)
    }
}
