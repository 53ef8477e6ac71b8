//! Numbered pseudocode listings that step `line` numbers point into

use crate::search::Algorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudocodeLine {
    pub line: u8,
    pub text: &'static str,
}

const fn l(line: u8, text: &'static str) -> PseudocodeLine {
    PseudocodeLine { line, text }
}

const BFS: &[PseudocodeLine] = &[
    l(1, "queue = [start], visited = {start}"),
    l(2, "while queue is not empty:"),
    l(3, "  current = dequeue(queue)"),
    l(4, "  if current == goal: return path(current)"),
    l(5, "  for each neighbor of current:"),
    l(6, "    if neighbor not in visited:"),
    l(7, "      mark visited, parent[neighbor] = current, enqueue"),
    l(8, "return no path"),
];

const DFS: &[PseudocodeLine] = &[
    l(1, "stack = [start], visited = {}"),
    l(2, "while stack is not empty:"),
    l(3, "  current = pop(stack); skip if visited, else mark visited"),
    l(4, "  if current == goal: return path(current)"),
    l(5, "  for each neighbor of current, in reverse order:"),
    l(6, "    if neighbor not in visited:"),
    l(7, "      parent[neighbor] = current, push neighbor"),
    l(8, "return no path"),
];

const DIJKSTRA: &[PseudocodeLine] = &[
    l(1, "dist[start] = 0, dist[other] = inf, frontier = [(start, 0)]"),
    l(2, "while frontier is not empty:"),
    l(3, "  current = extract_min(frontier); skip if visited, else mark visited"),
    l(4, "  if current == goal: return path(current), dist[current]"),
    l(5, "  for each unvisited neighbor of current:"),
    l(6, "    new_dist = dist[current] + weight"),
    l(7, "    if new_dist < dist[neighbor]:"),
    l(8, "      dist[neighbor] = new_dist, parent[neighbor] = current, push"),
    l(9, "return no path"),
];

const IDA_STAR: &[PseudocodeLine] = &[
    l(1, "bound = h(start), path = [start]"),
    l(2, "loop:"),
    l(3, "  t = search(start, 0, bound)"),
    l(4, "  if t == FOUND: return path"),
    l(5, "  if t == inf: return no path"),
    l(6, "  bound = t"),
];

/// The listing for an algorithm
pub fn listing(algorithm: Algorithm) -> &'static [PseudocodeLine] {
    match algorithm {
        Algorithm::Bfs => BFS,
        Algorithm::Dfs => DFS,
        Algorithm::Dijkstra => DIJKSTRA,
        Algorithm::IdaStar => IDA_STAR,
    }
}

/// Text of a single listing line
pub fn line_text(algorithm: Algorithm, line: u8) -> Option<&'static str> {
    listing(algorithm)
        .iter()
        .find(|l| l.line == line)
        .map(|l| l.text)
}
