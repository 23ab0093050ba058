//! Single-source unweighted shortest paths (repeated BFS)
//!
//! Treats the adjacency table as undirected and runs one breadth-first
//! traversal per source node. Used instead of the all-pairs engine when
//! the (possibly sampled) graph is too large for O(V^3) relaxation.

use super::ShortestPathRecord;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Repeated breadth-first shortest-path engine
#[derive(Debug, Default)]
pub struct BfsEngine;

impl BfsEngine {
    /// Create the engine
    pub fn new() -> Self {
        Self
    }

    /// Run a BFS from every node and emit one record per reachable
    /// unordered pair, only from the source that is lexicographically
    /// smaller than the destination. Unreachable pairs produce no
    /// record; absence is the "no path" signal.
    pub fn compute(&self, adjacency: &HashMap<String, Vec<String>>) -> Vec<ShortestPathRecord> {
        let mut records = Vec::new();
        for source in adjacency.keys() {
            self.compute_from(adjacency, source, &mut records);
        }

        debug!(
            nodes = adjacency.len(),
            pairs = records.len(),
            "breadth-first shortest paths computed"
        );
        records
    }

    /// One traversal: record the parent link the first time a neighbor
    /// is discovered, then read each path back along the parent chain.
    fn compute_from(
        &self,
        adjacency: &HashMap<String, Vec<String>>,
        source: &str,
        records: &mut Vec<ShortestPathRecord>,
    ) {
        let mut parent: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        visited.insert(source);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            let Some(neighbors) = adjacency.get(current) else {
                continue;
            };
            for neighbor in neighbors {
                if visited.insert(neighbor.as_str()) {
                    parent.insert(neighbor.as_str(), current);
                    queue.push_back(neighbor.as_str());
                }
            }
        }

        for destination in visited {
            if source >= destination {
                continue;
            }

            let mut node_path = vec![destination.to_string()];
            let mut current = destination;
            while let Some(&up) = parent.get(current) {
                node_path.push(up.to_string());
                current = up;
            }
            node_path.reverse();

            let edge_path = node_path
                .windows(2)
                .map(|hop| (hop[0].clone(), hop[1].clone()))
                .collect();

            records.push(ShortestPathRecord {
                source: source.to_string(),
                target: destination.to_string(),
                node_path,
                edge_path,
            });
        }
    }
}
