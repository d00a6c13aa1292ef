//! wgraph
//!
//! A weighted directed graph with single-source shortest paths (Dijkstra) and
//! an adjacency-matrix view.
//!
//! # Example Usage
//!
//! ```rust
//! use wgraph::{Distance, WeightedGraph};
//!
//! let mut graph = WeightedGraph::new();
//! graph.add_edge(1, 2, 1).unwrap();
//! graph.add_edge(2, 3, 2).unwrap();
//! graph.add_edge(1, 3, 10).unwrap();
//! graph.add_node(9);
//!
//! let paths = graph.shortest_paths_from(1).unwrap();
//! assert_eq!(paths.distance(3), Some(Distance::Finite(3)));
//! assert_eq!(paths.distance(9), Some(Distance::Unreachable));
//!
//! println!("{}", graph.render_adjacency_matrix());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{PathResult, ShortestPaths};
pub use graph::{
    AdjacencyMatrix, Distance, GraphError, GraphResult, NodeId, Weight, WeightedGraph,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
