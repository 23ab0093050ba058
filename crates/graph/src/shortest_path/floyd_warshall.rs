//! All-pairs weighted shortest paths (Floyd-Warshall)
//!
//! Operates on the full coauthor node set with direct-edge distances of
//! 1/weight, so more co-occurrences mean a shorter collaboration
//! distance. Missing distances read as a finite sentinel equal to the
//! node count: every direct edge weighs at most 1.0 and a path has at
//! most V-1 hops, so any achievable path sum stays below it.

use super::ShortestPathRecord;
use crate::coauthor::CoauthorGraph;
use crate::pair::NodePair;
use std::collections::HashMap;
use tracing::debug;

/// Configuration for the all-pairs engine
#[derive(Debug, Clone)]
pub struct AllPairsConfig {
    /// Emit records for pairs left at the sentinel distance. The
    /// historical behavior emits them unconditionally, with the seeded
    /// degenerate path; callers wanting only real paths can turn this
    /// off.
    pub emit_unreachable: bool,
}

impl Default for AllPairsConfig {
    fn default() -> Self {
        Self {
            emit_unreachable: true,
        }
    }
}

/// First hop of the shortest walk, kept for both walk directions of one
/// canonical pair
#[derive(Debug, Clone)]
struct FirstHops {
    from_small: String,
    from_large: String,
}

/// Output of the all-pairs engine: the emitted records plus the
/// converged distance table (exposed for validation)
#[derive(Debug)]
pub struct AllPairsResult {
    /// One record per unordered pair, `source < target`
    pub records: Vec<ShortestPathRecord>,

    /// Converged distances; absent pairs never beat the sentinel
    pub distances: HashMap<NodePair, f64>,

    /// Sentinel distance used for absent pairs (= node count)
    pub sentinel: f64,
}

impl AllPairsResult {
    /// Converged distance between two nodes, sentinel when no path was
    /// found
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.distances
            .get(&NodePair::new(a, b))
            .copied()
            .unwrap_or(self.sentinel)
    }
}

/// Floyd-Warshall engine with path reconstruction
#[derive(Debug, Default)]
pub struct AllPairsEngine {
    config: AllPairsConfig,
}

impl AllPairsEngine {
    /// Create an engine with the given configuration
    pub fn new(config: AllPairsConfig) -> Self {
        Self { config }
    }

    /// Run the standard triple loop (k outermost) over all unordered
    /// node pairs and reconstruct one path per pair.
    pub fn compute(&self, graph: &CoauthorGraph) -> AllPairsResult {
        let nodes: Vec<String> = graph.nodes().iter().cloned().collect();
        let n = nodes.len();
        let sentinel = n as f64;

        // Seed direct distances from edge weights; self-pairs carry no
        // distance
        let mut distances: HashMap<NodePair, f64> = graph
            .weights()
            .iter()
            .filter(|(pair, _)| !pair.is_self_pair())
            .map(|(pair, &count)| (pair.clone(), 1.0 / count as f64))
            .collect();

        // Seed first hops for every unordered pair over all nodes, not
        // just connected ones: the direct hop from one endpoint is the
        // other endpoint
        let mut next: HashMap<NodePair, FirstHops> = HashMap::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let pair = NodePair::new(nodes[i].clone(), nodes[j].clone());
                let hops = FirstHops {
                    from_small: pair.large().to_string(),
                    from_large: pair.small().to_string(),
                };
                next.insert(pair, hops);
            }
        }

        for k in &nodes {
            for i in 0..n {
                for j in (i + 1)..n {
                    if nodes[i] == *k || nodes[j] == *k {
                        continue;
                    }
                    let pair = NodePair::new(nodes[i].clone(), nodes[j].clone());
                    let through_k = pair_distance(&distances, sentinel, pair.small(), k)
                        + pair_distance(&distances, sentinel, k, pair.large());
                    let current = distances.get(&pair).copied().unwrap_or(sentinel);
                    if through_k < current {
                        let hops = FirstHops {
                            from_small: first_hop(&next, pair.small(), k),
                            from_large: first_hop(&next, pair.large(), k),
                        };
                        distances.insert(pair.clone(), through_k);
                        next.insert(pair, hops);
                    }
                }
            }
        }

        let mut records = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let pair = NodePair::new(nodes[i].clone(), nodes[j].clone());
                if !distances.contains_key(&pair) && !self.config.emit_unreachable {
                    continue;
                }
                records.push(reconstruct(&next, &pair, n));
            }
        }

        debug!(
            nodes = n,
            pairs = records.len(),
            "all-pairs shortest paths computed"
        );
        AllPairsResult {
            records,
            distances,
            sentinel,
        }
    }
}

/// Distance between two distinct nodes, sentinel when unknown
fn pair_distance(distances: &HashMap<NodePair, f64>, sentinel: f64, a: &str, b: &str) -> f64 {
    distances
        .get(&NodePair::new(a, b))
        .copied()
        .unwrap_or(sentinel)
}

/// First hop of the converged walk from `from` toward `to`
fn first_hop(next: &HashMap<NodePair, FirstHops>, from: &str, to: &str) -> String {
    let pair = NodePair::new(from, to);
    next.get(&pair)
        .map(|hops| {
            if from == pair.small() {
                hops.from_small.clone()
            } else {
                hops.from_large.clone()
            }
        })
        .unwrap_or_else(|| to.to_string())
}

/// Walk the next-hop chain from the smaller endpoint to the larger one.
/// Converged tables cannot cycle, so the walk needs at most n hops.
fn reconstruct(
    next: &HashMap<NodePair, FirstHops>,
    pair: &NodePair,
    n: usize,
) -> ShortestPathRecord {
    let source = pair.small().to_string();
    let target = pair.large().to_string();

    let mut node_path = vec![source.clone()];
    let mut edge_path = Vec::new();
    let mut current = source.clone();
    while current != target && edge_path.len() < n {
        let step = first_hop(next, &current, &target);
        edge_path.push((current.clone(), step.clone()));
        node_path.push(step.clone());
        current = step;
    }

    ShortestPathRecord {
        source,
        target,
        node_path,
        edge_path,
    }
}
