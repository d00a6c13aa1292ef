pub mod common;
pub mod pathfinding;

pub use common::{GraphView, NodeId};
pub use pathfinding::{dijkstra, DijkstraResult};
