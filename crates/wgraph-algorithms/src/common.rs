//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

use rustc_hash::FxHashMap;

/// Node Identifier type (i64)
pub type NodeId = i64;

/// A dense, integer-indexed view of a weighted graph in Compressed Sparse Row (CSR) format.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: FxHashMap<NodeId, usize>,

    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,
    /// Edge weights, aligned with `out_targets`
    pub weights: Vec<u32>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a node, aligned with `successors`
    pub fn weights(&self, idx: usize) -> &[u32] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.weights[start..end]
    }

    /// Iterate `(target_idx, weight)` pairs for the outgoing edges of a node
    pub fn out_edges(&self, idx: usize) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.successors(idx)
            .iter()
            .copied()
            .zip(self.weights(idx).iter().copied())
    }

    /// Dense index of a node id, if the node is part of the view
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Total number of edges in the view
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Build a view from per-node adjacency lists.
    ///
    /// `outgoing[i]` holds `(target_idx, weight)` pairs for the node at dense index `i`,
    /// and `index_to_node[i]` is its id.
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        outgoing: Vec<Vec<(usize, u32)>>,
    ) -> Self {
        debug_assert_eq!(index_to_node.len(), outgoing.len());

        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut weights = Vec::new();

        out_offsets.push(0);
        for neighbors in outgoing {
            for (target, weight) in neighbors {
                out_targets.push(target);
                weights.push(weight);
            }
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            weights,
        }
    }
}
