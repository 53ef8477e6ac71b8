//! Graph documents as produced by generators and JSON uploads
//!
//! Only `id` on nodes and `source`/`target`/`weight` on edges are read;
//! display fields (labels, colors, sizes) are ignored.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_graph;
use crate::error::{PathtraceError, Result};
use crate::graph::adjacency::{build_adjacency, AdjacencyMap};
use crate::graph::types::{Cost, NodeId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
}

impl NodeSpec {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: NodeId,
    pub target: NodeId,
    /// Absent or `null` means weight 1
    #[serde(default)]
    pub weight: Option<f64>,
}

impl EdgeSpec {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: None,
        }
    }

    pub fn weighted(source: impl Into<NodeId>, target: impl Into<NodeId>, weight: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight: Some(weight),
        }
    }

    /// Effective weight, defaulting to 1
    pub fn cost(&self) -> Cost {
        self.weight.map(Cost::new).unwrap_or(Cost::DEFAULT_WEIGHT)
    }
}

/// A graph as `{ nodes: [...], edges: [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphInput {
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

impl GraphInput {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read a graph document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathtraceError::io_operation("read graph", path.display(), e))?;
        let graph = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "graph_loaded"
        );
        Ok(graph)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Fail with `NodeNotFound` unless `id` is a declared node
    pub fn require_node(&self, id: &str) -> Result<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(PathtraceError::NodeNotFound { id: id.to_string() })
        }
    }

    /// Caller-side validation before a search.
    ///
    /// Negative and non-finite weights are rejected. Edges that reference
    /// undeclared nodes are accepted; the adapter treats such endpoints as
    /// nodes without neighbors.
    pub fn validate(&self) -> Result<()> {
        for edge in &self.edges {
            if let Some(weight) = edge.weight {
                if !weight.is_finite() || weight < 0.0 {
                    bail_graph!(
                        "edge {} -> {} has weight {} (weights must be finite and >= 0)",
                        edge.source,
                        edge.target,
                        weight
                    );
                }
            }
        }

        let declared: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !declared.contains(endpoint.as_str()) {
                    tracing::warn!(
                        source = %edge.source,
                        target = %edge.target,
                        endpoint = %endpoint,
                        "edge references undeclared node"
                    );
                }
            }
        }

        Ok(())
    }

    pub fn adjacency(&self) -> AdjacencyMap {
        build_adjacency(&self.nodes, &self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_ignores_display_fields() {
        let json = r##"{
            "nodes": [
                {"id": "0", "label": "N0", "fill": "#7A8F9E"},
                {"id": "1", "label": "N1"}
            ],
            "edges": [
                {"id": "0-1", "source": "0", "target": "1", "weight": 4, "label": "4", "size": 1}
            ]
        }"##;
        let graph = GraphInput::from_json_str(json).unwrap();
        assert_eq!(graph.nodes, vec![NodeSpec::new("0"), NodeSpec::new("1")]);
        assert_eq!(graph.edges[0].cost(), Cost::new(4.0));
    }

    #[test]
    fn test_missing_and_null_weight_default_to_one() {
        let json = r#"{
            "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}],
            "edges": [
                {"source": "a", "target": "b"},
                {"source": "b", "target": "c", "weight": null}
            ]
        }"#;
        let graph = GraphInput::from_json_str(json).unwrap();
        assert_eq!(graph.edges[0].cost(), Cost::DEFAULT_WEIGHT);
        assert_eq!(graph.edges[1].cost(), Cost::DEFAULT_WEIGHT);
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = GraphInput::from_json_str(r#"{"nodes": []"#).unwrap_err();
        assert!(matches!(err, PathtraceError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let graph = GraphInput {
            nodes: vec![NodeSpec::new("a"), NodeSpec::new("b")],
            edges: vec![EdgeSpec::weighted("a", "b", -2.0)],
        };
        let err = graph.validate().unwrap_err();
        assert!(matches!(err, PathtraceError::InvalidGraph { .. }));
    }

    #[test]
    fn test_validate_accepts_undeclared_endpoint() {
        let graph = GraphInput {
            nodes: vec![NodeSpec::new("a")],
            edges: vec![EdgeSpec::new("a", "ghost")],
        };
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn test_require_node() {
        let graph = GraphInput {
            nodes: vec![NodeSpec::new("a")],
            edges: vec![],
        };
        assert!(graph.require_node("a").is_ok());
        let err = graph.require_node("z").unwrap_err();
        assert!(matches!(err, PathtraceError::NodeNotFound { id } if id == "z"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(
            &path,
            r#"{"nodes": [{"id": "x"}, {"id": "y"}], "edges": [{"source": "x", "target": "y", "weight": 2}]}"#,
        )
        .unwrap();

        let graph = GraphInput::load(&path).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = GraphInput::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(
            err,
            PathtraceError::FailedOperationWithTarget { .. }
        ));
    }
}
