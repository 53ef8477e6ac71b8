//! Subcommand argument structures

use std::path::PathBuf;

use clap::Args;
use pathtrace_core::search::Algorithm;

use super::parse::parse_algorithm;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Graph document (JSON with `nodes` and `edges`)
    pub graph: PathBuf,

    /// Start node id
    #[arg(long, short)]
    pub start: String,

    /// Goal node id
    #[arg(long, short)]
    pub goal: String,

    /// Search algorithm: BFS, DFS, Dijkstra or IDA* (defaults to the configured one, then BFS)
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Also write a plain-text report of the trace to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show the pseudocode line for each step (human format)
    #[arg(long)]
    pub pseudocode: bool,
}

#[derive(Args, Debug, Clone)]
pub struct AdjacencyArgs {
    /// Graph document (JSON with `nodes` and `edges`)
    pub graph: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PseudocodeArgs {
    /// Algorithm name: BFS, DFS, Dijkstra or IDA*
    #[arg(value_parser = parse_algorithm)]
    pub algorithm: Algorithm,
}
