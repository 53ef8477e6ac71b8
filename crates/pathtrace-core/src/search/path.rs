//! Path reconstruction from parent pointers

use std::collections::HashMap;

use crate::graph::types::NodeId;

/// child -> parent, filled only for nodes reached through an edge
pub type ParentMap = HashMap<NodeId, NodeId>;

/// Walk back from `goal` until a node without a parent (the start).
///
/// Returns the path start..goal inclusive. The walk takes at most
/// `parents.len()` hops, so a malformed map cannot loop forever.
pub fn reconstruct_path(parents: &ParentMap, goal: &str) -> Vec<NodeId> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;

    while let Some(parent) = parents.get(current) {
        if path.len() > parents.len() {
            break;
        }
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    path
}
