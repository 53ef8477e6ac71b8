//! Pathtrace - instrumented graph search CLI
//!
//! Runs BFS, DFS, Dijkstra or IDA* over a JSON graph and prints every
//! state transition of the search, not just the final path.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use pathtrace_core::config::Config;
use pathtrace_core::error::PathtraceError;
use pathtrace_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Before a config is loaded only the flag can select the error format
    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    let format = config.output_format(cli.format);
    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

/// Parse argv, turning clap failures into an exit code.
///
/// `--format` is global, so a parse failure can happen before `Cli.format`
/// exists; argv is scanned directly to decide on a JSON envelope.
fn parse_cli() -> Result<Cli, ExitCode> {
    let err = match Cli::try_parse() {
        Ok(cli) => return Ok(cli),
        Err(err) => err,
    };

    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !argv_requests_json() {
        err.exit();
    }

    let error = PathtraceError::UsageError(err.to_string());
    eprintln!("{}", error.to_json());
    Err(exit_code(&error))
}

/// Write `err` to stderr in the resolved format and map it to an exit code
fn report_error(err: &PathtraceError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        _ if quiet => {}
        _ => eprintln!("error: {}", err),
    }
    exit_code(err)
}

fn exit_code(err: &PathtraceError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
