//! Weighted directed graph
//!
//! This module implements the graph data model with:
//! - Integer-identified nodes, inserted idempotently
//! - Directed edges with non-negative integer weights, one per ordered pair
//! - An adjacency-matrix projection in node insertion order

pub mod matrix;
pub mod store;
pub mod types;

// Re-export main types
pub use matrix::AdjacencyMatrix;
pub use store::{GraphError, GraphResult, WeightedGraph};
pub use types::{Distance, NodeId, Weight};
