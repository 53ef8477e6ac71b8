use std::collections::{HashMap, HashSet};

use crate::graph::{AdjacencyMap, Cost, NodeId};
use crate::search::path::{reconstruct_path, ParentMap};
use crate::search::trace::{format_path, DfsStep, Step, Trace};

const LINE_INIT: u8 = 1;
const LINE_LOOP: u8 = 2;
const LINE_POP: u8 = 3;
const LINE_GOAL: u8 = 4;
const LINE_NEIGHBORS: u8 = 5;
const LINE_PUSH: u8 = 7;
const LINE_EXHAUSTED: u8 = 8;

/// State tracked during a traced DFS run
struct DfsState {
    stack: Vec<NodeId>,
    visited: HashSet<NodeId>,
    visited_order: Vec<NodeId>,
    parents: ParentMap,
    /// Cost along the parent chain back to the start
    costs: HashMap<NodeId, Cost>,
    trace: Trace,
}

impl DfsState {
    fn new(start: &str) -> Self {
        Self {
            stack: vec![start.to_string()],
            visited: HashSet::new(),
            visited_order: Vec::new(),
            parents: ParentMap::new(),
            costs: HashMap::from([(start.to_string(), Cost::ZERO)]),
            trace: Trace::new(),
        }
    }

    fn snapshot(&self, active: Option<&str>, line: u8, description: String) -> DfsStep {
        DfsStep {
            active: active.map(str::to_string),
            visited: self.visited_order.clone(),
            open_list: self.stack.clone(),
            line: Some(line),
            description,
            ..Default::default()
        }
    }

    fn record_parent(&mut self, child: &str, parent: &str, weight: Cost) {
        let cost = self.cost_of(parent) + weight;
        self.parents.insert(child.to_string(), parent.to_string());
        self.costs.insert(child.to_string(), cost);
    }

    fn cost_of(&self, id: &str) -> Cost {
        self.costs.get(id).copied().unwrap_or(Cost::ZERO)
    }

    fn emit(&mut self, step: DfsStep) {
        self.trace.push(Step::Dfs(step));
    }
}

/// Depth-first search from `start` to `goal`, recording every transition.
///
/// Visited membership is checked when a node is popped, not when it is
/// pushed, so a node may sit on the stack more than once; stale copies
/// are skipped silently. Neighbors are pushed in reverse stored order so
/// the first-listed neighbor is explored first. The path found is
/// whatever depth-first exploration reaches first, with no minimality.
#[tracing::instrument(skip(adjacency), fields(start = %start, goal = %goal))]
pub fn dfs(adjacency: &AdjacencyMap, start: &str, goal: &str) -> Trace {
    let mut state = DfsState::new(start);
    let step = state.snapshot(
        None,
        LINE_INIT,
        format!("starting DFS: stack initialised with node {start}"),
    );
    state.emit(step);

    while !state.stack.is_empty() {
        let step = state.snapshot(
            None,
            LINE_LOOP,
            format!("stack holds {} node(s), continuing", state.stack.len()),
        );
        state.emit(step);

        let Some(current) = state.stack.pop() else {
            break;
        };
        if !state.visited.insert(current.clone()) {
            continue;
        }
        state.visited_order.push(current.clone());

        let step = state.snapshot(
            Some(current.as_str()),
            LINE_POP,
            format!("popped node {current} from the stack and marked it visited"),
        );
        state.emit(step);

        if current == goal {
            let final_path = reconstruct_path(&state.parents, goal);
            let cost = state.cost_of(goal);
            let description = format!(
                "goal {goal} reached: path {} ({} edge(s), cost {cost})",
                format_path(&final_path),
                final_path.len() - 1
            );
            let step = state
                .snapshot(Some(current.as_str()), LINE_GOAL, description)
                .succeed(final_path, cost);
            state.emit(step);
            tracing::debug!(steps = state.trace.len(), found = true, "dfs_complete");
            return state.trace;
        }

        let step = state.snapshot(
            Some(current.as_str()),
            LINE_NEIGHBORS,
            format!("examining neighbors of node {current} in reverse order"),
        );
        state.emit(step);

        for neighbor in adjacency.neighbors(&current).iter().rev() {
            if state.visited.contains(&neighbor.target) {
                continue;
            }
            state.record_parent(&neighbor.target, &current, neighbor.weight);
            state.stack.push(neighbor.target.clone());

            let step = state
                .snapshot(
                    Some(current.as_str()),
                    LINE_PUSH,
                    format!("pushed neighbor {} onto the stack", neighbor.target),
                )
                .with_looking_at(&neighbor.target);
            state.emit(step);
        }
    }

    let step = state.snapshot(
        None,
        LINE_EXHAUSTED,
        format!("stack exhausted: no path exists from {start} to {goal}"),
    );
    state.emit(step);
    tracing::debug!(steps = state.trace.len(), found = false, "dfs_complete");
    state.trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeSpec, GraphInput, NodeSpec};
    use crate::search::trace::StepView;

    fn graph(nodes: &[&str], edges: &[(&str, &str)]) -> AdjacencyMap {
        GraphInput {
            nodes: nodes.iter().map(|id| NodeSpec::new(*id)).collect(),
            edges: edges.iter().map(|(s, t)| EdgeSpec::new(*s, *t)).collect(),
        }
        .adjacency()
    }

    fn popped(trace: &Trace) -> Vec<&str> {
        trace
            .iter()
            .filter(|s| s.line() == Some(LINE_POP))
            .filter_map(|s| s.active())
            .collect()
    }

    #[test]
    fn test_dfs_explores_first_listed_neighbor_first() {
        // a has neighbors b, c (in that order); b leads to d
        let adjacency = graph(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d")],
        );
        let trace = dfs(&adjacency, "a", "c");
        assert_eq!(popped(&trace), vec!["a", "b", "d", "c"]);
        assert_eq!(trace.final_path().unwrap(), &["a", "c"]);
    }

    #[test]
    fn test_dfs_pushes_in_reverse_order() {
        let adjacency = graph(&["a", "b", "c"], &[("a", "b"), ("a", "c")]);
        let trace = dfs(&adjacency, "a", "z");
        let pushed: Vec<&str> = trace
            .iter()
            .filter(|s| s.line() == Some(LINE_PUSH))
            .filter_map(|s| s.looking_at())
            .take(2)
            .collect();
        assert_eq!(pushed, vec!["c", "b"]);
    }

    #[test]
    fn test_dfs_path_need_not_be_shortest() {
        // a-b-c-d chain plus a direct a-d edge listed last
        let adjacency = graph(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")],
        );
        let trace = dfs(&adjacency, "a", "d");
        assert_eq!(trace.final_path().unwrap(), &["a", "b", "c", "d"]);
        assert_eq!(trace.final_cost(), Some(Cost::new(3.0)));
    }

    #[test]
    fn test_dfs_cost_follows_latest_push() {
        // c is pushed by a first, then re-pushed by b and popped from there
        let adjacency = graph(&["a", "b", "c"], &[("a", "b"), ("a", "c"), ("b", "c")]);
        let trace = dfs(&adjacency, "a", "c");
        assert_eq!(popped(&trace), vec!["a", "b", "c"]);
        assert_eq!(trace.final_path().unwrap(), &["a", "b", "c"]);
        assert_eq!(trace.final_cost(), Some(Cost::new(2.0)));
    }

    #[test]
    fn test_dfs_stale_entries_skipped_without_pop_step() {
        // triangle: c is pushed by a and again by b
        let adjacency = graph(&["a", "b", "c"], &[("a", "b"), ("a", "c"), ("b", "c")]);
        let trace = dfs(&adjacency, "a", "missing");
        let pops = popped(&trace);
        assert_eq!(pops, vec!["a", "b", "c"]);
        assert!(!trace.succeeded());
        assert!(trace.last().unwrap().description().contains("no path"));
    }

    #[test]
    fn test_dfs_start_is_goal() {
        let adjacency = graph(&["solo"], &[]);
        let trace = dfs(&adjacency, "solo", "solo");
        assert!(trace.succeeded());
        assert_eq!(trace.final_path().unwrap(), &["solo"]);
        assert_eq!(trace.final_cost(), Some(Cost::ZERO));
    }
}
