//! Core type definitions for the weighted graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge weight. Stored weights are always non-negative; the signed type lets
/// callers hand over raw user input and get a typed rejection back.
///
/// Weights are 32-bit and distances 64-bit, so path costs never overflow.
pub type Weight = i32;

/// Identifier of a node. Identity is value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub i64);

impl NodeId {
    pub fn new(id: i64) -> Self {
        NodeId(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId(id as i64)
    }
}

/// Shortest-path distance from a source node.
///
/// `Unreachable` is the "infinity" sentinel: it is a distinct variant rather
/// than a reserved numeric value, so no relaxation can ever produce it.
/// Serializes as a number, or `null` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn as_option(&self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Unreachable => None,
        }
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(d) => Distance::Finite(d),
            None => Distance::Unreachable,
        }
    }
}

impl From<Distance> for Option<u64> {
    fn from(value: Distance) -> Self {
        value.as_option()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}
