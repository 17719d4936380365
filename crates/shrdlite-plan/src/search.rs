//! Generic A* search.
//!
//! The graph is abstract: anything that can enumerate outgoing edges and
//! give its nodes a deterministic string identity can be searched. The
//! planner instantiates this with the blocks-world state graph, and the
//! tests with small synthetic graphs.

use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::SearchError;

/// An outgoing edge of a search graph.
#[derive(Debug, Clone)]
pub struct Edge<N> {
    pub to: N,
    pub cost: usize,
}

/// The capability a graph must offer to be searched.
pub trait SearchGraph {
    type Node: Clone;

    /// All edges leaving `node`. Must not mutate the node.
    fn edges(&self, node: &Self::Node) -> Vec<Edge<Self::Node>>;

    /// Deterministic identity of a node; equal keys mean equal nodes.
    fn key(&self, node: &Self::Node) -> String;
}

/// A path found by [`a_star`], start and goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<N> {
    pub path: Vec<N>,
    pub cost: usize,
}

/// Min-heap entry ordered by `f`, then by insertion sequence.
///
/// `BinaryHeap` is a max-heap, so the ordering is inverted. The sequence
/// number makes tie-breaking deterministic.
#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    f: usize,
    seq: u64,
    g: usize,
    key: String,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Classical A* with a consistent interface for inadmissible inputs kept
/// out: with an admissible `heuristic`, the returned path is optimal.
///
/// Improved `g` values re-enqueue the node; stale entries are recognised at
/// pop time by comparing against the best known `g`. Closed nodes are never
/// reopened. The wall clock is checked at the top of every pop iteration.
pub fn a_star<G>(
    graph: &G,
    start: G::Node,
    is_goal: impl Fn(&G::Node) -> bool,
    heuristic: impl Fn(&G::Node) -> usize,
    timeout: Duration,
) -> Result<SearchResult<G::Node>, SearchError>
where
    G: SearchGraph,
{
    let started = Instant::now();
    let mut open = BinaryHeap::new();
    let mut nodes: HashMap<String, G::Node> = HashMap::new();
    let mut best_g: HashMap<String, usize> = HashMap::new();
    let mut parent: HashMap<String, String> = HashMap::new();
    let mut closed: HashSet<String> = HashSet::new();
    let mut seq: u64 = 0;
    let mut popped: u64 = 0;

    let start_key = graph.key(&start);
    open.push(OpenEntry {
        f: heuristic(&start),
        seq,
        g: 0,
        key: start_key.clone(),
    });
    best_g.insert(start_key.clone(), 0);
    nodes.insert(start_key, start);

    while let Some(entry) = open.pop() {
        if started.elapsed() > timeout {
            return Err(SearchError::Timeout(timeout));
        }
        // A cheaper route to this node was queued after this entry.
        if best_g.get(&entry.key).is_some_and(|&g| g < entry.g) {
            continue;
        }
        if !closed.insert(entry.key.clone()) {
            continue;
        }
        popped += 1;

        let node = nodes[&entry.key].clone();
        if is_goal(&node) {
            debug!(expanded = popped, cost = entry.g, "goal state reached");
            return Ok(SearchResult {
                path: reconstruct(&nodes, &parent, &entry.key),
                cost: entry.g,
            });
        }

        for edge in graph.edges(&node) {
            let neighbor_key = graph.key(&edge.to);
            if closed.contains(&neighbor_key) {
                continue;
            }
            let tentative = entry.g + edge.cost;
            if best_g
                .get(&neighbor_key)
                .is_some_and(|&known| known <= tentative)
            {
                continue;
            }
            seq += 1;
            best_g.insert(neighbor_key.clone(), tentative);
            parent.insert(neighbor_key.clone(), entry.key.clone());
            open.push(OpenEntry {
                f: tentative + heuristic(&edge.to),
                seq,
                g: tentative,
                key: neighbor_key.clone(),
            });
            nodes.insert(neighbor_key, edge.to);
        }
    }

    Err(SearchError::NoPath)
}

/// Walk the parent map back from the goal and reverse.
fn reconstruct<N: Clone>(
    nodes: &HashMap<String, N>,
    parent: &HashMap<String, String>,
    goal_key: &str,
) -> Vec<N> {
    let mut path = vec![nodes[goal_key].clone()];
    let mut key = goal_key;
    while let Some(previous) = parent.get(key) {
        path.push(nodes[previous].clone());
        key = previous;
    }
    path.reverse();
    path
}
