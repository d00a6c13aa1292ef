//! Graph algorithms module
//!
//! Algorithms are implemented in the `wgraph-algorithms` crate over a dense
//! [`GraphView`]. This module provides the integration/adapter layer that
//! snapshots a [`WeightedGraph`] and maps results back to [`NodeId`]s.

use crate::graph::{Distance, GraphError, GraphResult, NodeId, WeightedGraph};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;
use wgraph_algorithms::NodeId as AlgoNodeId;

// Re-export algorithms
pub use wgraph_algorithms::{dijkstra, DijkstraResult, GraphView};

/// Build a GraphView from the graph for algorithm execution
///
/// Dense indices follow node insertion order. Weights are validated as
/// non-negative on insertion, so the conversion to `u32` is lossless.
pub fn build_view(graph: &WeightedGraph) -> GraphView {
    let index_to_node: Vec<AlgoNodeId> = graph.nodes().map(|n| n.as_i64()).collect();

    let outgoing = graph
        .adjacency()
        .values()
        .map(|edges| {
            edges
                .iter()
                .filter_map(|(to, &weight)| {
                    debug_assert!(weight >= 0, "negative weight stored");
                    let target = graph.adjacency().get_index_of(to)?;
                    Some((target, weight.unsigned_abs()))
                })
                .collect()
        })
        .collect();

    GraphView::from_adjacency_list(index_to_node, outgoing)
}

/// Cheapest path between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: NodeId,
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: u64,
}

/// Distances from one source to every node of the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: NodeId,
    /// Every node of the graph, in insertion order (same order as the dense
    /// indices of `tree`)
    distances: IndexMap<NodeId, Distance>,
    /// Raw Dijkstra output, used for path reconstruction
    #[serde(skip)]
    tree: DijkstraResult,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`, `None` if the node was not in the graph
    pub fn distance(&self, node: impl Into<NodeId>) -> Option<Distance> {
        self.distances.get(&node.into()).copied()
    }

    /// `(node, distance)` pairs in node insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (NodeId, Distance)> + '_ {
        self.distances.iter().map(|(&n, &d)| (n, d))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of nodes with a finite distance, source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_reachable()).count()
    }

    /// Reconstruct the cheapest path to `target`, `None` if unreachable
    pub fn path_to(&self, target: impl Into<NodeId>) -> Option<PathResult> {
        let target = target.into();
        let target_idx = self.distances.get_index_of(&target)?;
        let cost = self.tree.distance(target_idx)?;
        let path = self
            .tree
            .path_to(target_idx)?
            .into_iter()
            .map(|idx| self.distances.get_index(idx).map(|(&node, _)| node))
            .collect::<Option<Vec<_>>>()?;

        Some(PathResult { source: self.source, target, path, cost })
    }
}

/// Run Dijkstra from `source` over a snapshot of `graph`
pub fn shortest_paths_from(graph: &WeightedGraph, source: NodeId) -> GraphResult<ShortestPaths> {
    let view = build_view(graph);
    let source_idx = view
        .index_of(source.as_i64())
        .ok_or(GraphError::NodeNotFound(source))?;

    let result = dijkstra(&view, source_idx);

    let distances: IndexMap<NodeId, Distance> = view
        .index_to_node
        .iter()
        .zip(&result.dist)
        .map(|(&node, &dist)| (NodeId(node), Distance::from(dist)))
        .collect();

    debug!(
        %source,
        reachable = result.reachable_count(),
        total = view.node_count,
        "computed shortest paths"
    );

    Ok(ShortestPaths { source, distances, tree: result })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeightedGraph {
        let mut graph = WeightedGraph::new();
        graph.add_edge(1, 2, 1).unwrap();
        graph.add_edge(2, 3, 2).unwrap();
        graph.add_edge(1, 3, 10).unwrap();
        graph.add_node(9);
        graph
    }

    #[test]
    fn test_build_view() {
        let view = build_view(&sample());

        assert_eq!(view.node_count, 4);
        assert_eq!(view.index_to_node, vec![1, 2, 3, 9]);
        assert_eq!(view.edge_count(), 3);
        assert_eq!(view.out_edges(0).collect::<Vec<_>>(), vec![(1, 1), (2, 10)]);
        assert_eq!(view.out_degree(3), 0);
    }

    #[test]
    fn test_distances_in_insertion_order() {
        let paths = shortest_paths_from(&sample(), NodeId(1)).unwrap();

        let got: Vec<_> = paths.iter().collect();
        assert_eq!(
            got,
            vec![
                (NodeId(1), Distance::Finite(0)),
                (NodeId(2), Distance::Finite(1)),
                (NodeId(3), Distance::Finite(3)),
                (NodeId(9), Distance::Unreachable),
            ]
        );
        assert_eq!(paths.reachable_count(), 3);
        assert_eq!(paths.len(), 4);
    }

    #[test]
    fn test_path_reconstruction() {
        let paths = shortest_paths_from(&sample(), NodeId(1)).unwrap();

        let path = paths.path_to(3).unwrap();
        assert_eq!(path.path, vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(path.cost, 3);
        assert_eq!(paths.path_to(1).unwrap().path, vec![NodeId(1)]);
        assert!(paths.path_to(9).is_none());
        assert!(paths.path_to(42).is_none());
    }

    #[test]
    fn test_serialize_distances() {
        let paths = shortest_paths_from(&sample(), NodeId(1)).unwrap();
        let json = serde_json::to_value(&paths).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "source": 1,
                "distances": { "1": 0, "2": 1, "3": 3, "9": null }
            })
        );
    }
}
