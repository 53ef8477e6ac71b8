//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Top-level pathtrace configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults applied to `pathtrace run`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Algorithm used when `--algorithm` is not given (BFS, DFS, Dijkstra, IDA*)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_algorithm: Option<String>,
}

/// Defaults for trace rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format used when `--format` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Annotate human output with the pseudocode line of each step
    #[serde(default)]
    pub pseudocode: bool,
}
