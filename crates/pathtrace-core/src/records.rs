//! Utilities for the records output format
//!
//! One record per line, prefixed by its kind:
//! - `H`: header with run parameters
//! - `S`: one step of the trace
//! - `P`: the final path, present only when one was found
//! - `A`: one adjacency entry
//!
//! Node ids and descriptions are always double-quoted with `"` escaped;
//! a bare `-` means "no value".

use crate::graph::{AdjacencyMap, Cost};
use crate::search::{Algorithm, StepView, Trace};

/// Escape a string for embedding in a quoted records field.
/// Backslashes are doubled first, then `"` becomes `\"`.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// Quote a free-form field such as a node id or description
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

fn quoted_or_dash(value: Option<&str>) -> String {
    value.map(quoted).unwrap_or_else(|| "-".to_string())
}

/// Format a run header line
pub fn format_run_header(algorithm: Algorithm, start: &str, goal: &str, trace: &Trace) -> String {
    format!(
        "H pathtrace=1 records=1 mode=run algorithm={} start={} goal={} found={} steps={}",
        algorithm,
        quoted(start),
        quoted(goal),
        trace.succeeded(),
        trace.len()
    )
}

/// Format a step line
///
/// Returns an S-line: 1-based index, pseudocode line, active node, examined
/// neighbor, then the quoted description.
pub fn format_step_line(index: usize, step: &impl StepView) -> String {
    let line = step
        .line()
        .map(|l| l.to_string())
        .unwrap_or_else(|| "-".to_string());
    let mut record = format!(
        "S {} line={} active={} looking_at={}",
        index,
        line,
        quoted_or_dash(step.active()),
        quoted_or_dash(step.looking_at())
    );
    if let Some(cost) = step.cost() {
        record.push_str(&format!(" cost={}", cost));
    }
    if step.success() {
        record.push_str(" success=true");
    }
    record.push_str(&format!(" {}", quoted(step.description())));
    record
}

/// Format the final path line; ids are quoted and comma-separated
pub fn format_path_line(path: &[String], cost: Option<Cost>) -> String {
    let ids: Vec<String> = path.iter().map(|id| quoted(id)).collect();
    let mut record = format!(
        "P path={} length={}",
        ids.join(","),
        path.len().saturating_sub(1)
    );
    if let Some(cost) = cost {
        record.push_str(&format!(" cost={}", cost));
    }
    record
}

/// All records for a run: header, steps, then the path if found
pub fn format_run(algorithm: Algorithm, start: &str, goal: &str, trace: &Trace) -> Vec<String> {
    let mut lines = vec![format_run_header(algorithm, start, goal, trace)];
    lines.extend(
        trace
            .iter()
            .enumerate()
            .map(|(index, step)| format_step_line(index + 1, step)),
    );
    if let Some(path) = trace.final_path() {
        lines.push(format_path_line(path, trace.final_cost()));
    }
    lines
}

/// Header plus one A-line per adjacency entry, in declaration order
pub fn format_adjacency(adjacency: &AdjacencyMap) -> Vec<String> {
    let mut lines = vec![format!(
        "H pathtrace=1 records=1 mode=adjacency nodes={}",
        adjacency.len()
    )];
    for node in adjacency.nodes() {
        for neighbor in adjacency.neighbors(node) {
            lines.push(format!(
                "A {} {} weight={}",
                quoted(node),
                quoted(&neighbor.target),
                neighbor.weight
            ));
        }
    }
    lines
}
