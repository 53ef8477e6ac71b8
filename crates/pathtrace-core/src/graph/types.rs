use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Opaque node identifier, unique within a graph
pub type NodeId = String;

/// A path cost or edge weight.
///
/// Weights are non-negative; `Cost::INFINITY` stands for "unreached" in
/// distance tables and "no further bound" in iterative deepening.
/// Ordering is total (`f64::total_cmp`) so costs can key a heap.
#[derive(Debug, Clone, Copy)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);
    /// Weight used for edges that do not declare one
    pub const DEFAULT_WEIGHT: Cost = Cost(1.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT_WEIGHT
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

/// Integral costs print without a fractional part ("3", not "3.0")
impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_infinite() {
            write!(f, "inf")
        } else if self.0.fract() == 0.0 && self.0.abs() < 1e15 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Infinite costs serialize as `null`
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// One entry of a node's adjacency sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub target: NodeId,
    pub weight: Cost,
}

impl Neighbor {
    pub fn new(target: impl Into<NodeId>, weight: Cost) -> Self {
        Self {
            target: target.into(),
            weight,
        }
    }
}
