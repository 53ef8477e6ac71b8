//! `pathtrace run`: load a graph, search it and print the trace

use std::fs;
use std::time::Instant;

use crate::cli::{OutputFormat, RunArgs};
use crate::commands::dispatch::CommandContext;
use pathtrace_core::bail_invalid;
use pathtrace_core::error::{PathtraceError, Result};
use pathtrace_core::graph::GraphInput;
use pathtrace_core::records;
use pathtrace_core::report::{render_annotated, render_report, summary_line};
use pathtrace_core::search::{search, Algorithm, Trace};
use pathtrace_core::trace_time;

/// A finished search and the parameters that produced it
struct RunOutcome<'a> {
    algorithm: Algorithm,
    start: &'a str,
    goal: &'a str,
    trace: Trace,
}

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    if args.report.as_deref() == Some(args.graph.as_path()) {
        bail_invalid!("--report", "report path would overwrite the graph file");
    }

    let algorithm = match args.algorithm {
        Some(algorithm) => algorithm,
        None => ctx.config.default_algorithm()?.unwrap_or(Algorithm::Bfs),
    };

    let graph = GraphInput::load(&args.graph)?;
    graph.validate()?;
    graph.require_node(&args.start)?;
    graph.require_node(&args.goal)?;
    trace_time!(ctx.start, "load_graph");

    let search_start = Instant::now();
    let adjacency = graph.adjacency();
    let trace = search(algorithm, &adjacency, &args.start, &args.goal);
    trace_time!(search_start, "search", steps = trace.len());

    tracing::info!(
        algorithm = %algorithm,
        steps = trace.len(),
        found = trace.succeeded(),
        "search_complete"
    );

    let outcome = RunOutcome {
        algorithm,
        start: &args.start,
        goal: &args.goal,
        trace,
    };

    if let Some(path) = &args.report {
        let report = render_report(outcome.algorithm, outcome.start, outcome.goal, &outcome.trace);
        fs::write(path, report)
            .map_err(|e| PathtraceError::io_operation("write report", path.display(), e))?;
        tracing::debug!(path = %path.display(), "report_written");
    }

    match ctx.format() {
        OutputFormat::Human => {
            let pseudocode = args.pseudocode || ctx.config.output.pseudocode;
            output_human(ctx, &outcome, pseudocode);
        }
        OutputFormat::Json => output_json(&outcome)?,
        OutputFormat::Records => output_records(&outcome),
    }

    Ok(())
}

fn output_human(ctx: &CommandContext, outcome: &RunOutcome, pseudocode: bool) {
    let RunOutcome {
        algorithm,
        start,
        goal,
        trace,
    } = outcome;

    if ctx.cli.quiet {
        println!("{}", summary_line(start, goal, trace));
        return;
    }

    let rendered = if pseudocode {
        render_annotated(*algorithm, start, goal, trace)
    } else {
        render_report(*algorithm, start, goal, trace)
    };
    print!("{}", rendered);
}

fn output_json(outcome: &RunOutcome) -> Result<()> {
    let output = serde_json::json!({
        "algorithm": outcome.algorithm,
        "start": outcome.start,
        "goal": outcome.goal,
        "found": outcome.trace.succeeded(),
        "finalPath": outcome.trace.final_path(),
        "cost": outcome.trace.final_cost(),
        "steps": &outcome.trace,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(outcome: &RunOutcome) {
    for line in records::format_run(outcome.algorithm, outcome.start, outcome.goal, &outcome.trace)
    {
        println!("{}", line);
    }
}
