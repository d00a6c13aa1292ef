//! In-memory weighted graph storage
//!
//! Nodes and their outgoing edges live in insertion-ordered maps:
//! - nodes: NodeId -> (destination NodeId -> Weight)
//!
//! Insertion order is the enumeration order for the adjacency matrix and for
//! shortest-path results.

use super::matrix::AdjacencyMatrix;
use super::types::{NodeId, Weight};
use crate::algo::{self, PathResult, ShortestPaths};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge {from} -> {to}: weight {weight} is negative")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Weighted directed graph
///
/// At most one edge exists per ordered `(from, to)` pair; adding it again
/// overwrites the weight. Self-loops are allowed. There is no removal.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Outgoing edges for each node, keyed by destination
    adjacency: IndexMap<NodeId, IndexMap<NodeId, Weight>>,

    /// Number of distinct directed edges
    edge_count: usize,
}

impl WeightedGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if it is absent.
    ///
    /// Returns `true` when the node was newly created; adding an existing node
    /// is a no-op.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, IndexMap::new());
        debug!(node = %id, "added node");
        true
    }

    /// Record the directed edge `from -> to`, creating missing endpoints.
    ///
    /// Returns the previous weight if the edge already existed. Negative
    /// weights are rejected before the graph is touched.
    pub fn add_edge(
        &mut self,
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        weight: Weight,
    ) -> GraphResult<Option<Weight>> {
        let from = from.into();
        let to = to.into();

        if weight < 0 {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }

        self.add_node(from);
        self.add_node(to);

        let previous = self
            .adjacency
            .get_mut(&from)
            .and_then(|edges| edges.insert(to, weight));

        match previous {
            Some(old) => debug!(%from, %to, old, weight, "overwrote edge"),
            None => {
                self.edge_count += 1;
                debug!(%from, %to, weight, "added edge");
            }
        }

        Ok(previous)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: impl Into<NodeId>) -> bool {
        self.adjacency.contains_key(&id.into())
    }

    /// Weight of the edge `from -> to`, if present
    pub fn weight(&self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Option<Weight> {
        self.adjacency
            .get(&from.into())
            .and_then(|edges| edges.get(&to.into()))
            .copied()
    }

    /// Outgoing `(destination, weight)` pairs of a node, in insertion order
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(&to, &w)| (to, w)))
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Clear all data
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Project the graph onto a square matrix in insertion order.
    ///
    /// Cell `(i, j)` is the weight of `i -> j`, or 0 when there is no edge. A
    /// zero-weight edge looks the same as a missing one.
    pub fn render_adjacency_matrix(&self) -> AdjacencyMatrix {
        let nodes: Vec<NodeId> = self.nodes().collect();
        let cells = self
            .adjacency
            .values()
            .map(|edges| {
                nodes
                    .iter()
                    .map(|to| edges.get(to).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        AdjacencyMatrix::new(nodes, cells)
    }

    /// Minimum total weight from `source` to every node, using Dijkstra.
    ///
    /// Nodes that cannot be reached report [`Distance::Unreachable`](super::Distance).
    /// Fails with [`GraphError::NodeNotFound`] if `source` is not in the graph.
    pub fn shortest_paths_from(&self, source: impl Into<NodeId>) -> GraphResult<ShortestPaths> {
        algo::shortest_paths_from(self, source.into())
    }

    /// Cheapest path between two nodes, or `None` if `target` is unreachable.
    pub fn shortest_path(
        &self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> GraphResult<Option<PathResult>> {
        let target = target.into();
        if !self.has_node(target) {
            return Err(GraphError::NodeNotFound(target));
        }
        Ok(self.shortest_paths_from(source)?.path_to(target))
    }

    pub(crate) fn adjacency(&self) -> &IndexMap<NodeId, IndexMap<NodeId, Weight>> {
        &self.adjacency
    }
}
