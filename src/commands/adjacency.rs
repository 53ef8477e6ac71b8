//! `pathtrace adjacency`: show the symmetrized neighbor lists of a graph

use crate::cli::{AdjacencyArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use pathtrace_core::error::Result;
use pathtrace_core::graph::{AdjacencyMap, GraphInput};
use pathtrace_core::records;
use pathtrace_core::trace_time;

/// Execute the adjacency command
pub fn execute(ctx: &CommandContext, args: &AdjacencyArgs) -> Result<()> {
    let graph = GraphInput::load(&args.graph)?;
    graph.validate()?;
    let adjacency = graph.adjacency();
    trace_time!(ctx.start, "build_adjacency");

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, &adjacency),
        OutputFormat::Json => output_json(&adjacency)?,
        OutputFormat::Records => {
            for line in records::format_adjacency(&adjacency) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, adjacency: &AdjacencyMap) {
    if adjacency.is_empty() {
        if !ctx.cli.quiet {
            println!("Graph has no nodes");
        }
        return;
    }

    for node in adjacency.nodes() {
        let neighbors: Vec<String> = adjacency
            .neighbors(node)
            .iter()
            .map(|n| format!("{} ({})", n.target, n.weight))
            .collect();
        if neighbors.is_empty() {
            println!("{}: -", node);
        } else {
            println!("{}: {}", node, neighbors.join(", "));
        }
    }
}

fn output_json(adjacency: &AdjacencyMap) -> Result<()> {
    let nodes: Vec<serde_json::Value> = adjacency
        .nodes()
        .map(|node| {
            serde_json::json!({
                "id": node,
                "neighbors": adjacency.neighbors(node),
            })
        })
        .collect();
    let output = serde_json::json!({ "nodes": nodes });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
