//! Shortest-path search over a collaboration graph.
//!
//! Breadth-first search with predecessor tracking. Each call owns its own
//! bookkeeping (visited set, predecessor map, frontier queue) for the
//! duration of that call and only borrows the graph, so sequential (or
//! later, concurrent) queries never share search state.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::graph::CollabGraph;

impl CollabGraph {
    /// Shortest path from `start` to `target`, ordered start → target and
    /// including both endpoints.
    ///
    /// The path alternates person and event nodes by construction. When
    /// several shortest paths exist, the first-discovered route wins; that
    /// follows adjacency-list (input record) order and is not stable across
    /// re-loads with reordered input.
    ///
    /// Returns an empty vector when either identifier is unknown or no
    /// connection exists; "no path" is an ordinary outcome, not an error.
    /// `shortest_path(x, x)` for a loaded `x` is the single-element path
    /// `[x]`.
    #[must_use]
    pub fn shortest_path(&self, start: &str, target: &str) -> Vec<String> {
        // An absent adjacency entry means an empty search space.
        if !self.contains(start) || !self.contains(target) {
            return Vec::new();
        }

        let mut seen: HashSet<&str> = HashSet::from([start]);
        let mut predecessor: HashMap<&str, &str> = HashMap::new();
        let mut frontier: VecDeque<&str> = VecDeque::from([start]);

        while let Some(current) = frontier.pop_front() {
            if current == target {
                let path = reconstruct(start, target, &predecessor);
                debug!(from = start, to = target, len = path.len(), "path found");
                return path;
            }
            for neighbor in self.neighbors(current) {
                if seen.insert(neighbor) {
                    // First write wins: a rediscovery at the same depth must
                    // not replace the recorded parent.
                    predecessor.entry(neighbor).or_insert(current);
                    frontier.push_back(neighbor);
                }
            }
        }

        debug!(from = start, to = target, "frontier exhausted, no path");
        Vec::new()
    }
}

/// Walk backward from `target` through the predecessor map, then flip the
/// result into start → target order.
fn reconstruct(start: &str, target: &str, predecessor: &HashMap<&str, &str>) -> Vec<String> {
    let mut path = vec![target.to_string()];
    let mut current = target;

    while current != start {
        let Some(parent) = predecessor.get(current) else {
            // Every dequeued node other than `start` has a recorded parent.
            return Vec::new();
        };
        path.push((*parent).to_string());
        current = *parent;
    }

    path.reverse();
    path
}
