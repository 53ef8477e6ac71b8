use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use indexmap::IndexMap;

use crate::graph::{AdjacencyMap, Cost, Neighbor, NodeId};
use crate::search::path::{reconstruct_path, ParentMap};
use crate::search::trace::{
    format_path, DistanceTable, FrontierEntry, Step, Trace, UniformCostStep,
};

#[cfg(test)]
mod tests;

const LINE_INIT: u8 = 1;
const LINE_LOOP: u8 = 2;
const LINE_EXTRACT: u8 = 3;
const LINE_GOAL: u8 = 4;
const LINE_NEIGHBORS: u8 = 5;
const LINE_CANDIDATE: u8 = 6;
const LINE_NO_IMPROVEMENT: u8 = 7;
const LINE_RELAX: u8 = 8;
const LINE_EXHAUSTED: u8 = 9;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then push order)
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    node_id: NodeId,
    dist: Cost,
    seq: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .cmp(&other.dist)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// State tracked during a traced uniform-cost run
struct DijkstraState {
    heap: BinaryHeap<Reverse<HeapEntry>>,
    next_seq: u64,
    /// Declaration order, then undeclared nodes in order of first relaxation
    distances: IndexMap<NodeId, Cost>,
    visited: HashSet<NodeId>,
    visited_order: Vec<NodeId>,
    parents: ParentMap,
    trace: Trace,
}

impl DijkstraState {
    fn new(adjacency: &AdjacencyMap, start: &str) -> Self {
        let mut state = Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            distances: adjacency
                .nodes()
                .map(|id| (id.clone(), Cost::INFINITY))
                .collect(),
            visited: HashSet::new(),
            visited_order: Vec::new(),
            parents: ParentMap::new(),
            trace: Trace::new(),
        };
        state.set_distance(start, Cost::ZERO);
        state.push(start, Cost::ZERO);
        state
    }

    /// Best-known distance; nodes never seen count as unreached
    fn distance(&self, id: &str) -> Cost {
        self.distances.get(id).copied().unwrap_or(Cost::INFINITY)
    }

    fn set_distance(&mut self, id: &str, dist: Cost) {
        self.distances.insert(id.to_string(), dist);
    }

    fn push(&mut self, id: &str, dist: Cost) {
        self.heap.push(Reverse(HeapEntry {
            node_id: id.to_string(),
            dist,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Frontier in the order entries would be extracted
    fn open_list(&self) -> Vec<FrontierEntry> {
        let mut entries: Vec<&HeapEntry> = self.heap.iter().map(|Reverse(e)| e).collect();
        entries.sort();
        entries
            .into_iter()
            .map(|e| FrontierEntry {
                id: e.node_id.clone(),
                dist: e.dist,
            })
            .collect()
    }

    fn distance_table(&self) -> DistanceTable {
        DistanceTable(self.distances.clone())
    }

    fn snapshot(&self, active: Option<&str>, line: u8, description: String) -> UniformCostStep {
        UniformCostStep {
            active: active.map(str::to_string),
            visited: self.visited_order.clone(),
            line: Some(line),
            description,
            ..Default::default()
        }
        .with_open_list(self.open_list())
        .with_distances(self.distance_table())
    }

    fn emit(&mut self, step: UniformCostStep) {
        self.trace.push(Step::UniformCost(step));
    }

    /// Candidate, then relax or no-improvement, for one unvisited neighbor
    fn relax(&mut self, current: &str, current_dist: Cost, neighbor: &Neighbor) {
        let target = neighbor.target.as_str();
        let candidate = current_dist + neighbor.weight;
        let known = self.distance(target);

        let step = self
            .snapshot(
                Some(current),
                LINE_CANDIDATE,
                format!(
                    "candidate distance to {target}: {current_dist} + {} = {candidate}",
                    neighbor.weight
                ),
            )
            .with_looking_at(target);
        self.emit(step);

        let step = if candidate < known {
            self.set_distance(target, candidate);
            self.parents.insert(target.to_string(), current.to_string());
            self.push(target, candidate);
            self.snapshot(
                Some(current),
                LINE_RELAX,
                format!("distance to {target} lowered from {known} to {candidate}"),
            )
        } else {
            self.snapshot(
                Some(current),
                LINE_NO_IMPROVEMENT,
                format!("{candidate} does not improve on {known}: {target} unchanged"),
            )
        };
        self.emit(step.with_looking_at(target));
    }
}

/// Uniform-cost (Dijkstra) search from `start` to `goal`, recording every
/// transition.
///
/// The frontier is a binary heap with lazy deletion: relaxing a node pushes
/// a fresh entry and leaves the old one in place. Entries for nodes that are
/// already visited are dropped on extraction without emitting a step. Equal
/// distances are extracted in push order.
#[tracing::instrument(skip(adjacency), fields(start = %start, goal = %goal))]
pub fn dijkstra(adjacency: &AdjacencyMap, start: &str, goal: &str) -> Trace {
    let mut state = DijkstraState::new(adjacency, start);
    let step = state.snapshot(
        Some(start),
        LINE_INIT,
        format!("starting Dijkstra: distance to node {start} is 0, every other node is inf"),
    );
    state.emit(step);

    while !state.heap.is_empty() {
        let step = state.snapshot(
            None,
            LINE_LOOP,
            format!("frontier holds {} entry(ies), continuing", state.heap.len()),
        );
        state.emit(step);

        let Some(Reverse(entry)) = state.heap.pop() else {
            break;
        };
        if !state.visited.insert(entry.node_id.clone()) {
            continue;
        }
        let current = entry.node_id;
        let current_dist = entry.dist;
        state.visited_order.push(current.clone());

        let step = state.snapshot(
            Some(current.as_str()),
            LINE_EXTRACT,
            format!("extracted node {current} with minimum distance {current_dist}"),
        );
        state.emit(step);

        if current == goal {
            let final_path = reconstruct_path(&state.parents, goal);
            let description = format!(
                "goal {goal} reached: path {} with total cost {current_dist}",
                format_path(&final_path)
            );
            let step = state
                .snapshot(Some(current.as_str()), LINE_GOAL, description)
                .succeed(final_path, current_dist);
            state.emit(step);
            tracing::debug!(
                steps = state.trace.len(),
                found = true,
                cost = %current_dist,
                "dijkstra_complete"
            );
            return state.trace;
        }

        let step = state.snapshot(
            Some(current.as_str()),
            LINE_NEIGHBORS,
            format!("relaxing edges out of node {current}"),
        );
        state.emit(step);

        for neighbor in adjacency.neighbors(&current) {
            if !state.visited.contains(&neighbor.target) {
                state.relax(&current, current_dist, neighbor);
            }
        }
    }

    let step = state.snapshot(
        None,
        LINE_EXHAUSTED,
        format!("frontier exhausted: no path exists from {start} to {goal}"),
    );
    state.emit(step);
    tracing::debug!(steps = state.trace.len(), found = false, "dijkstra_complete");
    state.trace
}
