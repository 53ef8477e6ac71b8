use super::*;
use crate::graph::{EdgeSpec, GraphInput, NodeSpec};
use crate::search::trace::StepView;

fn weighted(nodes: &[&str], edges: &[(&str, &str, f64)]) -> AdjacencyMap {
    GraphInput {
        nodes: nodes.iter().map(|id| NodeSpec::new(*id)).collect(),
        edges: edges
            .iter()
            .map(|(s, t, w)| EdgeSpec::weighted(*s, *t, *w))
            .collect(),
    }
    .adjacency()
}

fn diamond() -> AdjacencyMap {
    weighted(
        &["0", "1", "2", "3"],
        &[("0", "1", 1.0), ("1", "2", 1.0), ("2", "3", 1.0), ("0", "3", 5.0)],
    )
}

fn extracted(trace: &Trace) -> Vec<&str> {
    trace
        .iter()
        .filter(|s| s.line() == Some(LINE_EXTRACT))
        .filter_map(|s| s.active())
        .collect()
}

fn uniform_steps(trace: &Trace) -> Vec<&UniformCostStep> {
    trace
        .iter()
        .filter_map(|s| match s {
            Step::UniformCost(step) => Some(step),
            _ => None,
        })
        .collect()
}

#[test]
fn test_heap_entry_orders_by_distance_then_sequence() {
    let entry = |id: &str, dist: f64, seq| HeapEntry {
        node_id: id.to_string(),
        dist: Cost::new(dist),
        seq,
    };
    assert!(entry("a", 1.0, 5) < entry("b", 2.0, 0));
    assert!(entry("a", 1.0, 0) < entry("b", 1.0, 1));

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry("late", 1.0, 2)));
    heap.push(Reverse(entry("far", 3.0, 0)));
    heap.push(Reverse(entry("early", 1.0, 1)));
    let order: Vec<String> =
        std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node_id)).collect();
    assert_eq!(order, vec!["early", "late", "far"]);
}

#[test]
fn test_dijkstra_prefers_cheaper_longer_path() {
    let trace = dijkstra(&diamond(), "0", "3");
    assert!(trace.succeeded());
    assert_eq!(trace.final_path().unwrap(), &["0", "1", "2", "3"]);
    assert_eq!(trace.final_cost(), Some(Cost::new(3.0)));
    assert!(trace.last().unwrap().description().contains("total cost 3"));
}

#[test]
fn test_dijkstra_init_step_seeds_distances() {
    let trace = dijkstra(&diamond(), "0", "3");
    let steps = uniform_steps(&trace);
    let init = steps[0];
    assert_eq!(init.line, Some(LINE_INIT));
    assert_eq!(init.active.as_deref(), Some("0"));

    let distances = init.distances.as_ref().unwrap();
    assert_eq!(distances.get("0"), Some(Cost::ZERO));
    assert_eq!(distances.get("3"), Some(Cost::INFINITY));
    let keys: Vec<&str> = distances.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(keys, vec!["0", "1", "2", "3"]);

    let open = init.open_list.as_ref().unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].id, "0");
}

#[test]
fn test_dijkstra_relaxation_lowers_distance() {
    let trace = dijkstra(&diamond(), "0", "3");
    let relaxed: Vec<(&str, Cost)> = uniform_steps(&trace)
        .into_iter()
        .filter(|s| s.line == Some(LINE_RELAX))
        .map(|s| {
            let target = s.looking_at.as_deref().unwrap();
            (target, s.distances.as_ref().unwrap().get(target).unwrap())
        })
        .collect();
    assert_eq!(
        relaxed,
        vec![
            ("1", Cost::new(1.0)),
            ("3", Cost::new(5.0)),
            ("2", Cost::new(2.0)),
            ("3", Cost::new(3.0)),
        ]
    );
}

#[test]
fn test_dijkstra_stale_entries_dropped_silently() {
    // node 3 is pushed at 5 and again at 3; the stale copy is never reported
    let trace = dijkstra(&diamond(), "0", "missing");
    assert_eq!(extracted(&trace), vec!["0", "1", "2", "3"]);
    let loops = trace
        .iter()
        .filter(|s| s.line() == Some(LINE_LOOP))
        .count();
    assert_eq!(loops, 5);
    assert!(!trace.succeeded());
    assert_eq!(trace.last().unwrap().line(), Some(LINE_EXHAUSTED));
    assert!(trace.last().unwrap().description().contains("no path"));
}

#[test]
fn test_dijkstra_reports_no_improvement() {
    let adjacency = weighted(
        &["a", "b", "c"],
        &[("a", "b", 1.0), ("a", "c", 1.0), ("b", "c", 5.0)],
    );
    let trace = dijkstra(&adjacency, "a", "c");
    let unchanged: Vec<&str> = trace
        .iter()
        .filter(|s| s.line() == Some(LINE_NO_IMPROVEMENT))
        .filter_map(|s| s.looking_at())
        .collect();
    assert_eq!(unchanged, vec!["c"]);
    assert_eq!(trace.final_path().unwrap(), &["a", "c"]);
    assert_eq!(trace.final_cost(), Some(Cost::new(1.0)));
}

#[test]
fn test_dijkstra_ties_extract_in_insertion_order() {
    let forward = weighted(&["a", "b", "c"], &[("a", "b", 1.0), ("a", "c", 1.0)]);
    assert_eq!(extracted(&dijkstra(&forward, "a", "z")), vec!["a", "b", "c"]);

    let swapped = weighted(&["a", "b", "c"], &[("a", "c", 1.0), ("a", "b", 1.0)]);
    assert_eq!(extracted(&dijkstra(&swapped, "a", "z")), vec!["a", "c", "b"]);
}

#[test]
fn test_dijkstra_open_list_in_extraction_order() {
    let adjacency = weighted(&["a", "b", "c"], &[("a", "b", 4.0), ("a", "c", 2.0)]);
    let trace = dijkstra(&adjacency, "a", "z");
    let last_relax = uniform_steps(&trace)
        .into_iter()
        .filter(|s| s.line == Some(LINE_RELAX))
        .last()
        .unwrap();
    let open: Vec<(&str, Cost)> = last_relax
        .open_list
        .as_ref()
        .unwrap()
        .iter()
        .map(|e| (e.id.as_str(), e.dist))
        .collect();
    assert_eq!(open, vec![("c", Cost::new(2.0)), ("b", Cost::new(4.0))]);
}

#[test]
fn test_dijkstra_success_step_clears_frontier() {
    let trace = dijkstra(&diamond(), "0", "3");
    let Some(Step::UniformCost(last)) = trace.last() else {
        panic!("expected a uniform-cost step");
    };
    assert!(last.success);
    assert_eq!(last.open_list.as_deref(), Some(&[][..]));
    assert_eq!(trace.iter().filter(|s| s.success()).count(), 1);
}

#[test]
fn test_dijkstra_reaches_undeclared_endpoint() {
    let adjacency = weighted(&["a"], &[("a", "x", 2.0)]);
    let trace = dijkstra(&adjacency, "a", "x");
    assert_eq!(trace.final_path().unwrap(), &["a", "x"]);
    assert_eq!(trace.final_cost(), Some(Cost::new(2.0)));
}

#[test]
fn test_dijkstra_start_is_goal_costs_zero() {
    let adjacency = weighted(&["solo"], &[]);
    let trace = dijkstra(&adjacency, "solo", "solo");
    assert_eq!(trace.final_path().unwrap(), &["solo"]);
    assert_eq!(trace.final_cost(), Some(Cost::ZERO));
}

#[test]
fn test_dijkstra_trace_serializes_infinite_distance_as_null() {
    let trace = dijkstra(&diamond(), "0", "3");
    let json = serde_json::to_value(&trace).unwrap();
    assert_eq!(json[0]["algorithm"], "Dijkstra");
    assert_eq!(json[0]["distances"]["0"], 0.0);
    assert!(json[0]["distances"]["3"].is_null());
}
