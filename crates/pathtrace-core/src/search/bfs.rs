use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{AdjacencyMap, Cost, NodeId};
use crate::search::path::{reconstruct_path, ParentMap};
use crate::search::trace::{format_path, BfsStep, Step, Trace};

const LINE_INIT: u8 = 1;
const LINE_LOOP: u8 = 2;
const LINE_DEQUEUE: u8 = 3;
const LINE_GOAL: u8 = 4;
const LINE_NEIGHBORS: u8 = 5;
const LINE_ENQUEUE: u8 = 7;
const LINE_EXHAUSTED: u8 = 8;

/// State tracked during a traced BFS run
struct BfsState {
    queue: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
    visited_order: Vec<NodeId>,
    parents: ParentMap,
    /// Cost along the parent chain back to the start
    costs: HashMap<NodeId, Cost>,
    trace: Trace,
}

impl BfsState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            visited_order: Vec::new(),
            parents: ParentMap::new(),
            costs: HashMap::from([(start.to_string(), Cost::ZERO)]),
            trace: Trace::new(),
        };
        state.queue.push_back(start.to_string());
        state.mark_visited(start);
        state
    }

    /// Returns false if the node was already visited
    fn mark_visited(&mut self, id: &str) -> bool {
        if !self.visited.insert(id.to_string()) {
            return false;
        }
        self.visited_order.push(id.to_string());
        true
    }

    fn snapshot(&self, active: Option<&str>, line: u8, description: String) -> BfsStep {
        BfsStep {
            active: active.map(str::to_string),
            visited: self.visited_order.clone(),
            open_list: self.queue.iter().cloned().collect(),
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

    fn emit(&mut self, step: BfsStep) {
        self.trace.push(Step::Bfs(step));
    }
}

/// Breadth-first search from `start` to `goal`, recording every transition.
///
/// Neighbors are expanded in stored order, so the reported path has the
/// fewest edges of any start-goal path.
#[tracing::instrument(skip(adjacency), fields(start = %start, goal = %goal))]
pub fn bfs(adjacency: &AdjacencyMap, start: &str, goal: &str) -> Trace {
    let mut state = BfsState::new(start);
    let step = state.snapshot(
        None,
        LINE_INIT,
        format!("starting BFS: queue initialised with node {start}"),
    );
    state.emit(step);

    while !state.queue.is_empty() {
        let step = state.snapshot(
            None,
            LINE_LOOP,
            format!("queue holds {} node(s), continuing", state.queue.len()),
        );
        state.emit(step);

        let Some(current) = state.queue.pop_front() else {
            break;
        };

        let step = state.snapshot(
            Some(current.as_str()),
            LINE_DEQUEUE,
            format!("dequeued node {current} for processing"),
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
            tracing::debug!(steps = state.trace.len(), found = true, "bfs_complete");
            return state.trace;
        }

        let step = state.snapshot(
            Some(current.as_str()),
            LINE_NEIGHBORS,
            format!("scanning neighbors of node {current}"),
        );
        state.emit(step);

        for neighbor in adjacency.neighbors(&current) {
            if !state.mark_visited(&neighbor.target) {
                continue;
            }
            state.record_parent(&neighbor.target, &current, neighbor.weight);
            state.queue.push_back(neighbor.target.clone());

            let step = state
                .snapshot(
                    Some(current.as_str()),
                    LINE_ENQUEUE,
                    format!(
                        "neighbor {} not yet visited: marked and enqueued",
                        neighbor.target
                    ),
                )
                .with_looking_at(&neighbor.target);
            state.emit(step);
        }
    }

    let step = state.snapshot(
        None,
        LINE_EXHAUSTED,
        format!("queue exhausted: no path exists from {start} to {goal}"),
    );
    state.emit(step);
    tracing::debug!(steps = state.trace.len(), found = false, "bfs_complete");
    state.trace
}
