//! CLI commands for pathtrace

pub mod adjacency;
pub mod dispatch;
pub mod pseudocode;
pub mod run;
