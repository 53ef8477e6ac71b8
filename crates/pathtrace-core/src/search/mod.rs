//! Instrumented path search
//!
//! Four strategies share one contract: given an adjacency, a start and a
//! goal, produce a fully materialised [`Trace`] of every state transition.
//! - `bfs`: breadth-first, fewest edges
//! - `dfs`: depth-first, first path found
//! - `dijkstra`: uniform-cost, minimum total weight
//! - `ida`: iterative-deepening A* with a zero heuristic
//!
//! The engine never fails. Callers are expected to check that start and
//! goal exist before searching.

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod ida;
pub mod path;
pub mod pseudocode;
pub mod trace;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PathtraceError;
use crate::graph::{AdjacencyMap, GraphInput};

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use ida::ida_star;
pub use path::{reconstruct_path, ParentMap};
pub use trace::{format_path, Step, StepView, Trace};

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "BFS")]
    Bfs,
    #[serde(rename = "DFS")]
    Dfs,
    #[serde(rename = "Dijkstra")]
    Dijkstra,
    #[serde(rename = "IDA*")]
    IdaStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::IdaStar,
    ];

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::IdaStar => "IDA*",
        }
    }

    /// Resolve a canonical name or alias, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bfs" => Some(Algorithm::Bfs),
            "dfs" => Some(Algorithm::Dfs),
            "dijkstra" | "ucs" | "uniform-cost" => Some(Algorithm::Dijkstra),
            "ida*" | "ida" | "ida-star" => Some(Algorithm::IdaStar),
            _ => None,
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathtraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s).ok_or_else(|| PathtraceError::UnknownAlgorithm {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run one strategy over a prepared adjacency
pub fn search(algorithm: Algorithm, adjacency: &AdjacencyMap, start: &str, goal: &str) -> Trace {
    match algorithm {
        Algorithm::Bfs => bfs(adjacency, start, goal),
        Algorithm::Dfs => dfs(adjacency, start, goal),
        Algorithm::Dijkstra => dijkstra(adjacency, start, goal),
        Algorithm::IdaStar => ida_star(adjacency, start, goal),
    }
}

/// Build the adjacency for `graph` and run the strategy called `name`.
///
/// Unknown names produce an empty trace rather than an error.
pub fn run_algorithm(name: &str, graph: &GraphInput, start: &str, goal: &str) -> Trace {
    let Some(algorithm) = Algorithm::from_name(name) else {
        tracing::debug!(name, "unknown algorithm, returning empty trace");
        return Trace::new();
    };
    search(algorithm, &graph.adjacency(), start, goal)
}
