//! CLI argument parsing for pathtrace
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{AdjacencyArgs, PseudocodeArgs, RunArgs};
pub use pathtrace_core::format::OutputFormat;
use parse::parse_format;

/// Pathtrace - step-by-step traces of classic graph searches
#[derive(Parser, Debug)]
#[command(name = "pathtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records (defaults to the configured format, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug events and timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (overrides PATHTRACE_CONFIG and the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search and print its trace
    Run(RunArgs),

    /// Print the symmetrized adjacency of a graph
    Adjacency(AdjacencyArgs),

    /// Print the numbered pseudocode listing of an algorithm
    Pseudocode(PseudocodeArgs),
}
