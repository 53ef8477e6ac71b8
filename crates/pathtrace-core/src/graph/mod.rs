//! Graph input and adjacency construction
//!
//! - `input`: the `{ nodes, edges }` document consumed by the engine
//! - `adjacency`: symmetrized per-node neighbor sequences
//! - `types`: node ids, costs, neighbor entries

pub mod adjacency;
pub mod input;
pub mod types;

pub use adjacency::{build_adjacency, AdjacencyMap};
pub use input::{EdgeSpec, GraphInput, NodeSpec};
pub use types::{Cost, Neighbor, NodeId};
