//! Plain-text trace reports
//!
//! A report is a header line, one numbered line per step description and a
//! closing summary. The annotated variant also quotes the pseudocode line
//! each step refers to.

use crate::search::pseudocode::line_text;
use crate::search::{format_path, Algorithm, StepView, Trace};

/// Render a report of the whole trace
pub fn render_report(algorithm: Algorithm, start: &str, goal: &str, trace: &Trace) -> String {
    render(algorithm, start, goal, trace, false)
}

/// Like [`render_report`], with the pseudocode line under each step
pub fn render_annotated(algorithm: Algorithm, start: &str, goal: &str, trace: &Trace) -> String {
    render(algorithm, start, goal, trace, true)
}

/// One-line outcome of a run
pub fn summary_line(start: &str, goal: &str, trace: &Trace) -> String {
    match (trace.final_path(), trace.final_cost()) {
        (Some(path), Some(cost)) => format!(
            "Result: path {} ({} edge(s), cost {cost})",
            format_path(path),
            path.len() - 1
        ),
        (Some(path), None) => format!(
            "Result: path {} ({} edge(s))",
            format_path(path),
            path.len() - 1
        ),
        (None, _) => format!("Result: no path from {start} to {goal}"),
    }
}

fn render(algorithm: Algorithm, start: &str, goal: &str, trace: &Trace, annotate: bool) -> String {
    let mut lines = vec![format!(
        "{algorithm} search from {start} to {goal} ({} steps)",
        trace.len()
    )];

    for (index, step) in trace.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, step.description()));
        if !annotate {
            continue;
        }
        if let Some(line) = step.line() {
            let text = line_text(algorithm, line).unwrap_or("").trim();
            lines.push(format!("   [line {line}] {text}"));
        }
    }

    lines.push(summary_line(start, goal, trace));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
