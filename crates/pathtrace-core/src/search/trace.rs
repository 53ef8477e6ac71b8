//! Trace and step records produced by a search run
//!
//! Each algorithm records its own step shape. `StepView` is the common
//! read-only contract a renderer needs: active node, narration, final
//! path, success flag and pseudocode line.

use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::types::{Cost, NodeId};

/// Common accessors shared by every step variant
pub trait StepView {
    /// Node currently being processed
    fn active(&self) -> Option<&str>;
    /// Human-readable narration, never empty
    fn description(&self) -> &str;
    /// Reconstructed start..goal path, set on the terminal success step only
    fn final_path(&self) -> Option<&[NodeId]>;
    /// True on the terminal success step only
    fn success(&self) -> bool;
    /// Pseudocode line this step corresponds to
    fn line(&self) -> Option<u8>;

    /// Neighbor currently being examined
    fn looking_at(&self) -> Option<&str> {
        None
    }

    /// Accumulated path cost, set on success steps
    fn cost(&self) -> Option<Cost> {
        None
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Snapshot shared by breadth-first and depth-first search.
///
/// `visited` is the cumulative visited set in marking order; `open_list`
/// is the queue (front first) or stack (bottom first).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontierStep {
    pub active: Option<NodeId>,
    pub visited: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_at: Option<NodeId>,
    pub open_list: Vec<NodeId>,
    /// Weight sum along `final_path`, set with it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u8>,
    pub description: String,
}

pub type BfsStep = FrontierStep;
pub type DfsStep = FrontierStep;

impl FrontierStep {
    pub fn with_looking_at(mut self, neighbor: &str) -> Self {
        self.looking_at = Some(neighbor.to_string());
        self
    }

    /// Turn this snapshot into the terminal success step
    pub fn succeed(mut self, final_path: Vec<NodeId>, cost: Cost) -> Self {
        self.final_path = Some(final_path);
        self.open_list.clear();
        self.cost = Some(cost);
        self.success = true;
        self
    }
}

/// One `(node, tentative distance)` entry of the uniform-cost frontier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontierEntry {
    pub id: NodeId,
    pub dist: Cost,
}

/// Best-known distances in node declaration order, serialized as a map
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable(pub IndexMap<NodeId, Cost>);

impl DistanceTable {
    pub fn get(&self, id: &str) -> Option<Cost> {
        self.0.get(id).copied()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, NodeId, Cost> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniformCostStep {
    pub active: Option<NodeId>,
    pub visited: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub looking_at: Option<NodeId>,
    /// Frontier in extraction order; may hold stale duplicates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_list: Option<Vec<FrontierEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<DistanceTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u8>,
    pub description: String,
}

impl UniformCostStep {
    pub fn with_looking_at(mut self, neighbor: &str) -> Self {
        self.looking_at = Some(neighbor.to_string());
        self
    }

    pub fn with_open_list(mut self, open_list: Vec<FrontierEntry>) -> Self {
        self.open_list = Some(open_list);
        self
    }

    pub fn with_distances(mut self, distances: DistanceTable) -> Self {
        self.distances = Some(distances);
        self
    }

    pub fn succeed(mut self, final_path: Vec<NodeId>, cost: Cost) -> Self {
        self.final_path = Some(final_path);
        self.open_list = Some(Vec::new());
        self.cost = Some(cost);
        self.success = true;
        self
    }
}

/// Iterative-deepening snapshot; `path` is the current depth-first branch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdaStep {
    pub active: Option<NodeId>,
    pub path: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub g: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u8>,
    pub description: String,
}

impl StepView for FrontierStep {
    fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn final_path(&self) -> Option<&[NodeId]> {
        self.final_path.as_deref()
    }

    fn success(&self) -> bool {
        self.success
    }

    fn line(&self) -> Option<u8> {
        self.line
    }

    fn looking_at(&self) -> Option<&str> {
        self.looking_at.as_deref()
    }

    fn cost(&self) -> Option<Cost> {
        self.cost
    }
}

impl StepView for UniformCostStep {
    fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn final_path(&self) -> Option<&[NodeId]> {
        self.final_path.as_deref()
    }

    fn success(&self) -> bool {
        self.success
    }

    fn line(&self) -> Option<u8> {
        self.line
    }

    fn looking_at(&self) -> Option<&str> {
        self.looking_at.as_deref()
    }

    fn cost(&self) -> Option<Cost> {
        self.cost
    }
}

impl StepView for IdaStep {
    fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn final_path(&self) -> Option<&[NodeId]> {
        self.final_path.as_deref()
    }

    fn success(&self) -> bool {
        self.success
    }

    fn line(&self) -> Option<u8> {
        self.line
    }

    fn cost(&self) -> Option<Cost> {
        self.cost
    }
}

/// One trace record, tagged by the algorithm that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "algorithm")]
pub enum Step {
    #[serde(rename = "BFS")]
    Bfs(BfsStep),
    #[serde(rename = "DFS")]
    Dfs(DfsStep),
    #[serde(rename = "Dijkstra")]
    UniformCost(UniformCostStep),
    #[serde(rename = "IDA*")]
    Ida(IdaStep),
}

impl Step {
    fn view(&self) -> &dyn StepView {
        match self {
            Step::Bfs(step) | Step::Dfs(step) => step,
            Step::UniformCost(step) => step,
            Step::Ida(step) => step,
        }
    }
}

impl StepView for Step {
    fn active(&self) -> Option<&str> {
        self.view().active()
    }

    fn description(&self) -> &str {
        self.view().description()
    }

    fn final_path(&self) -> Option<&[NodeId]> {
        self.view().final_path()
    }

    fn success(&self) -> bool {
        self.view().success()
    }

    fn line(&self) -> Option<u8> {
        self.view().line()
    }

    fn looking_at(&self) -> Option<&str> {
        self.view().looking_at()
    }

    fn cost(&self) -> Option<Cost> {
        self.view().cost()
    }
}

/// Ordered, append-only record of one search run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: Step) {
        debug_assert!(
            !step.description().is_empty(),
            "every step needs a description"
        );
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Whether the run ended on a success step
    pub fn succeeded(&self) -> bool {
        self.last().is_some_and(StepView::success)
    }

    /// The reconstructed path of a successful run
    pub fn final_path(&self) -> Option<&[NodeId]> {
        self.last()
            .filter(|step| step.success())
            .and_then(StepView::final_path)
    }

    /// The accumulated cost reported by a successful run
    pub fn final_cost(&self) -> Option<Cost> {
        self.last()
            .filter(|step| step.success())
            .and_then(StepView::cost)
    }

    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(StepView::description)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Render a path as `a -> b -> c`
pub fn format_path(path: &[NodeId]) -> String {
    path.join(" -> ")
}
