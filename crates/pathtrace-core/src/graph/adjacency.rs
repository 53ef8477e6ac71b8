use std::collections::HashSet;

use indexmap::IndexMap;

use crate::graph::input::{EdgeSpec, NodeSpec};
use crate::graph::types::{Neighbor, NodeId};

/// Per-node neighbor sequences, in edge-list insertion order.
///
/// Declared nodes keep their declaration order so that anything seeded
/// from "every node" (the uniform-cost distance table) is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyMap {
    lists: IndexMap<NodeId, Vec<Neighbor>>,
}

impl AdjacencyMap {
    /// Neighbors of `id`; undeclared nodes have none
    pub fn neighbors(&self, id: &str) -> &[Neighbor] {
        self.lists.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lists.contains_key(id)
    }

    /// Declared nodes in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.lists.keys()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Whether `to` appears in the neighbor sequence of `from`
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|n| n.target == to)
    }

    fn declare(&mut self, id: &str) {
        self.lists.entry(id.to_string()).or_default();
    }

    fn append(&mut self, from: &str, neighbor: Neighbor) {
        if let Some(list) = self.lists.get_mut(from) {
            list.push(neighbor);
        }
    }
}

/// Build the symmetrized adjacency for a graph.
///
/// Each edge `(u, v, w)` adds `v` to `u`'s sequence. The reverse entry
/// `(u, w)` is added to `v` unless the edge list also declares some
/// `(v, u)` edge, in which case that edge supplies the reverse direction
/// with its own weight. Endpoints that are not declared nodes get no
/// sequence of their own.
pub fn build_adjacency(nodes: &[NodeSpec], edges: &[EdgeSpec]) -> AdjacencyMap {
    let mut adjacency = AdjacencyMap::default();
    for node in nodes {
        adjacency.declare(&node.id);
    }

    let declared_pairs: HashSet<(&str, &str)> = edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();

    for edge in edges {
        let weight = edge.cost();
        adjacency.append(&edge.source, Neighbor::new(edge.target.clone(), weight));

        let reverse_declared =
            declared_pairs.contains(&(edge.target.as_str(), edge.source.as_str()));
        if !reverse_declared {
            adjacency.append(&edge.target, Neighbor::new(edge.source.clone(), weight));
        }
    }

    tracing::debug!(
        nodes = adjacency.len(),
        edges = edges.len(),
        "adjacency_built"
    );
    adjacency
}
