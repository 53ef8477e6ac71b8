use std::collections::HashSet;

use crate::graph::{AdjacencyMap, Cost, Neighbor, NodeId};
use crate::search::trace::{format_path, IdaStep, Step, Trace};

const LINE_INIT: u8 = 1;
const LINE_ITERATION: u8 = 2;
const LINE_SEARCH: u8 = 3;
const LINE_FOUND: u8 = 4;
const LINE_EXHAUSTED: u8 = 5;
const LINE_RAISE: u8 = 6;

/// Placeholder heuristic; with `h = 0` the search is iterative-deepening
/// uniform-cost search.
fn heuristic(_node: &str) -> Cost {
    Cost::ZERO
}

/// Result of one bounded depth-first pass
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    /// Goal reached: the stacked path at that moment and its cost
    Found(Vec<NodeId>, Cost),
    /// Smallest `f` that overshot the bound, or infinity if nothing did
    Exceeded(Cost),
}

/// State tracked during a traced IDA* run
struct IdaState<'a> {
    adjacency: &'a AdjacencyMap,
    goal: &'a str,
    path: Vec<NodeId>,
    on_path: HashSet<NodeId>,
    trace: Trace,
}

impl<'a> IdaState<'a> {
    fn new(adjacency: &'a AdjacencyMap, start: &str, goal: &'a str) -> Self {
        Self {
            adjacency,
            goal,
            path: vec![start.to_string()],
            on_path: HashSet::from([start.to_string()]),
            trace: Trace::new(),
        }
    }

    fn snapshot(&self, active: Option<&str>, line: u8, description: String) -> IdaStep {
        IdaStep {
            active: active.map(str::to_string),
            path: self.path.clone(),
            line: Some(line),
            description,
            ..Default::default()
        }
    }

    fn emit(&mut self, step: IdaStep) {
        self.trace.push(Step::Ida(step));
    }

    fn enter(&mut self, id: &str) {
        self.path.push(id.to_string());
        self.on_path.insert(id.to_string());
    }

    fn leave(&mut self, id: &str) {
        self.path.pop();
        self.on_path.remove(id);
    }

    /// Explore `node`, which is already on the path.
    ///
    /// Pruned and goal nodes finish immediately; anything else becomes a
    /// frame whose neighbors are walked by [`IdaState::bounded_search`].
    fn visit(&mut self, node: &str, g: Cost, bound: Cost) -> Visit {
        let f = g + heuristic(node);
        let step = IdaStep {
            threshold: Some(bound),
            g: Some(g),
            f: Some(f),
            ..self.snapshot(
                Some(node),
                LINE_SEARCH,
                format!("exploring node {node}: g={g}, f={f}, bound={bound}"),
            )
        };
        self.emit(step);

        if f > bound {
            let step = IdaStep {
                threshold: Some(bound),
                f: Some(f),
                ..self.snapshot(
                    Some(node),
                    LINE_SEARCH,
                    format!("f={f} exceeds bound {bound}: pruning at node {node}"),
                )
            };
            self.emit(step);
            return Visit::Done(Outcome::Exceeded(f));
        }

        if node == self.goal {
            let step = IdaStep {
                threshold: Some(bound),
                g: Some(g),
                ..self.snapshot(
                    Some(node),
                    LINE_FOUND,
                    format!("goal {node} found within bound {bound}"),
                )
            };
            self.emit(step);
            return Visit::Done(Outcome::Found(self.path.clone(), g));
        }

        let mut neighbors = self.adjacency.neighbors(node).to_vec();
        neighbors.sort_by_key(|n| n.weight);
        Visit::Expand(Frame {
            node: node.to_string(),
            g,
            neighbors,
            next: 0,
            min: Cost::INFINITY,
        })
    }

    fn backtrack(&mut self, from: &str, to: &str, bound: Cost) {
        let step = IdaStep {
            threshold: Some(bound),
            ..self.snapshot(
                Some(to),
                LINE_SEARCH,
                format!("backtracking from {from} to node {to}"),
            )
        };
        self.emit(step);
    }

    /// Bounded depth-first pass from `root`, which is already on the path.
    ///
    /// The branch lives in an explicit frame stack, so depth is limited by
    /// the heap rather than the call stack. Every `enter` is matched by a
    /// `leave` before returning, whatever the outcome, so the path is back
    /// to its entry state on return.
    fn bounded_search(&mut self, root: &str, bound: Cost) -> Outcome {
        let mut frames = match self.visit(root, Cost::ZERO, bound) {
            Visit::Done(outcome) => return outcome,
            Visit::Expand(frame) => vec![frame],
        };

        while let Some(top) = frames.last_mut() {
            let Some(neighbor) = top.next_candidate(&self.on_path) else {
                let Some(done) = frames.pop() else {
                    break;
                };
                let Some(parent) = frames.last_mut() else {
                    return Outcome::Exceeded(done.min);
                };
                parent.min = parent.min.min(done.min);
                let parent_node = parent.node.clone();
                self.leave(&done.node);
                self.backtrack(&done.node, &parent_node, bound);
                continue;
            };

            let node = top.node.clone();
            let g = top.g + neighbor.weight;
            self.enter(&neighbor.target);
            match self.visit(&neighbor.target, g, bound) {
                Visit::Expand(child) => frames.push(child),
                Visit::Done(Outcome::Exceeded(t)) => {
                    if let Some(top) = frames.last_mut() {
                        top.min = top.min.min(t);
                    }
                    self.leave(&neighbor.target);
                    self.backtrack(&neighbor.target, &node, bound);
                }
                Visit::Done(found) => {
                    self.leave(&neighbor.target);
                    for frame in frames.iter().skip(1).rev() {
                        self.leave(&frame.node);
                    }
                    return found;
                }
            }
        }
        Outcome::Exceeded(Cost::INFINITY)
    }
}

/// Result of exploring a single node
enum Visit {
    Done(Outcome),
    Expand(Frame),
}

/// A node on the current branch whose neighbors are still being walked
struct Frame {
    node: NodeId,
    g: Cost,
    /// Sorted ascending by weight, stable for equal weights
    neighbors: Vec<Neighbor>,
    next: usize,
    min: Cost,
}

impl Frame {
    /// Next neighbor not already on the branch
    fn next_candidate(&mut self, on_path: &HashSet<NodeId>) -> Option<Neighbor> {
        while let Some(neighbor) = self.neighbors.get(self.next) {
            self.next += 1;
            if !on_path.contains(&neighbor.target) {
                return Some(neighbor.clone());
            }
        }
        None
    }
}

/// Iterative-deepening A* from `start` to `goal`, recording every transition.
///
/// Each iteration is a depth-first pass that prunes nodes whose
/// `f = g + h` exceeds the bound; the next bound is the smallest overshoot.
/// Nodes already on the current branch are never revisited, so passes
/// terminate on cyclic graphs.
#[tracing::instrument(skip(adjacency), fields(start = %start, goal = %goal))]
pub fn ida_star(adjacency: &AdjacencyMap, start: &str, goal: &str) -> Trace {
    let mut state = IdaState::new(adjacency, start, goal);
    let mut threshold = heuristic(start);

    let step = IdaStep {
        threshold: Some(threshold),
        ..state.snapshot(
            Some(start),
            LINE_INIT,
            format!("starting IDA*: bound = h({start}) = {threshold}"),
        )
    };
    state.emit(step);

    let mut iterations = 0_u32;
    loop {
        iterations += 1;
        let step = IdaStep {
            threshold: Some(threshold),
            ..state.snapshot(
                Some(start),
                LINE_ITERATION,
                format!("starting iteration {iterations} with bound {threshold}"),
            )
        };
        state.emit(step);

        match state.bounded_search(start, threshold) {
            Outcome::Found(path, cost) => {
                let description = format!(
                    "search finished: path {} with total cost {cost}",
                    format_path(&path)
                );
                let step = IdaStep {
                    active: Some(goal.to_string()),
                    path: path.clone(),
                    threshold: Some(threshold),
                    cost: Some(cost),
                    final_path: Some(path),
                    success: true,
                    line: Some(LINE_FOUND),
                    description,
                    ..Default::default()
                };
                state.emit(step);
                tracing::debug!(
                    steps = state.trace.len(),
                    iterations,
                    found = true,
                    "ida_complete"
                );
                return state.trace;
            }
            Outcome::Exceeded(next) if !next.is_finite() => {
                let step = state.snapshot(
                    None,
                    LINE_EXHAUSTED,
                    format!("no node exceeded bound {threshold}: no path exists from {start} to {goal}"),
                );
                state.emit(step);
                tracing::debug!(
                    steps = state.trace.len(),
                    iterations,
                    found = false,
                    "ida_complete"
                );
                return state.trace;
            }
            Outcome::Exceeded(next) => {
                let step = IdaStep {
                    threshold: Some(next),
                    ..state.snapshot(
                        Some(start),
                        LINE_RAISE,
                        format!("raising bound from {threshold} to {next}"),
                    )
                };
                state.emit(step);
                threshold = next;
            }
        }
    }
}
