//! Pathtrace Core Library
//!
//! Instrumented graph search: BFS, DFS, uniform-cost and iterative-deepening
//! strategies that record every state transition as a replayable trace.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
pub mod report;
pub mod search;
