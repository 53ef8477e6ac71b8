//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, Commands, OutputFormat};
use pathtrace_core::config::Config;
use pathtrace_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Format resolved from `--format` and the config file
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathtrace {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step traces of BFS, DFS, Dijkstra and IDA* searches.");
        println!();
        println!("Run `pathtrace --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Run(args) => crate::commands::run::execute(ctx, args),
            Commands::Adjacency(args) => crate::commands::adjacency::execute(ctx, args),
            Commands::Pseudocode(args) => crate::commands::pseudocode::execute(ctx, args),
        }
    }
}
