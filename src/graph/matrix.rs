//! Adjacency matrix projection of a weighted graph

use super::types::{NodeId, Weight};
use serde::Serialize;
use std::fmt;

/// Square matrix over the graph's nodes, in insertion order.
///
/// `cells[i][j]` is the weight of the edge `nodes[i] -> nodes[j]`, or 0 when
/// there is no such edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    nodes: Vec<NodeId>,
    cells: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(nodes: Vec<NodeId>, cells: Vec<Vec<Weight>>) -> Self {
        debug_assert_eq!(nodes.len(), cells.len());
        debug_assert!(cells.iter().all(|row| row.len() == nodes.len()));
        AdjacencyMatrix { nodes, cells }
    }

    /// Row and column order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Weight {
        self.cells[row][col]
    }

    /// Cell for the pair of node ids, `None` if either node is unknown
    pub fn get(&self, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Option<Weight> {
        let row = self.position(from.into())?;
        let col = self.position(to.into())?;
        Some(self.cells[row][col])
    }

    /// Iterate rows as `(node, cells)`
    pub fn rows(&self) -> impl Iterator<Item = (NodeId, &[Weight])> + '_ {
        self.nodes
            .iter()
            .copied()
            .zip(self.cells.iter().map(Vec::as_slice))
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }
}

/// Text grid: a header row of node ids, then one row per node with its id and
/// cells. Columns are right-aligned to a common width.
impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return Ok(());
        }

        let width = self
            .nodes
            .iter()
            .map(|n| n.to_string().len())
            .chain(self.cells.iter().flatten().map(|w| w.to_string().len()))
            .max()
            .unwrap_or(1);

        write!(f, "{:>width$}", "", width = width)?;
        for node in &self.nodes {
            write!(f, " {:>width$}", node.to_string(), width = width)?;
        }
        writeln!(f)?;

        for (node, row) in self.rows() {
            write!(f, "{:>width$}", node.to_string(), width = width)?;
            for weight in row {
                write!(f, " {:>width$}", weight, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
