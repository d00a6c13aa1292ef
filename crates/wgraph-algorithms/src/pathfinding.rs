//! Pathfinding algorithms
//!
//! Single-source Dijkstra over a [`GraphView`], using a binary heap with lazy
//! deletion: improved distances are pushed as new entries and stale entries are
//! discarded when popped for an already finalized node.

use super::common::GraphView;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Output of a single-source Dijkstra run, indexed by dense node index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DijkstraResult {
    /// Dense index of the source node
    pub source: usize,
    /// Final distance per node; `None` means unreachable
    pub dist: Vec<Option<u64>>,
    /// Predecessor on a shortest path; `None` for the source and unreachable nodes
    pub parent: Vec<Option<usize>>,
}

impl DijkstraResult {
    /// Distance of the node at `idx`, `None` if unreachable or out of range
    pub fn distance(&self, idx: usize) -> Option<u64> {
        self.dist.get(idx).copied().flatten()
    }

    /// Reconstruct the index path from the source to `target`
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;

        let mut path = vec![target];
        let mut curr = target;
        while let Some(prev) = self.parent[curr] {
            path.push(prev);
            curr = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Number of nodes with a finite distance (source included)
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_some()).count()
    }
}

/// State for Dijkstra priority queue
#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: u64,
    node_idx: usize,
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap; ties fall back to the lower index
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's Algorithm (single source, all targets)
///
/// Weights are `u32` and distances `u64`: a simple path has fewer than 2^32
/// edges, so no sum can overflow. Self-loops can never improve a distance.
///
/// # Panics
///
/// Panics if `source_idx` is not a valid index into `view`.
pub fn dijkstra(view: &GraphView, source_idx: usize) -> DijkstraResult {
    assert!(source_idx < view.node_count, "source index out of range");

    let mut dist: Vec<Option<u64>> = vec![None; view.node_count];
    let mut parent: Vec<Option<usize>> = vec![None; view.node_count];
    let mut visited = vec![false; view.node_count];
    let mut heap = BinaryHeap::new();

    dist[source_idx] = Some(0);
    heap.push(State { cost: 0, node_idx: source_idx });

    let mut stale = 0usize;
    while let Some(State { cost, node_idx }) = heap.pop() {
        if visited[node_idx] {
            stale += 1;
            continue;
        }
        visited[node_idx] = true;
        trace!(node = view.index_to_node[node_idx], cost, "finalized");

        for (next_idx, weight) in view.out_edges(node_idx) {
            let next_cost = cost + u64::from(weight);

            let improves = match dist[next_idx] {
                Some(current) => next_cost < current,
                None => true,
            };
            if improves {
                dist[next_idx] = Some(next_cost);
                parent[next_idx] = Some(node_idx);
                heap.push(State { cost: next_cost, node_idx: next_idx });
            }
        }
    }

    debug!(
        source = view.index_to_node[source_idx],
        nodes = view.node_count,
        stale_entries = stale,
        "dijkstra finished"
    );

    DijkstraResult { source: source_idx, dist, parent }
}
