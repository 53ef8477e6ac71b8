//! Command dispatch logic for pathtrace

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use pathtrace_core::config::Config;
use pathtrace_core::error::Result;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

/// Run the selected command with an already resolved config and format
pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    // Execute command
    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
