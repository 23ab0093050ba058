//! Shortest-path engines over the coauthor graph
//!
//! Two interchangeable strategies:
//! - all-pairs weighted (Floyd-Warshall with path reconstruction) over
//!   the full node set
//! - single-source unweighted BFS repeated per node, over a possibly
//!   sampled adjacency table
//!
//! Both emit one record per unordered pair, with the convention
//! `source < target` lexicographically so no pair is emitted twice.

mod bfs;
mod floyd_warshall;

pub use bfs::BfsEngine;
pub use floyd_warshall::{AllPairsConfig, AllPairsEngine, AllPairsResult};

/// One shortest path between an unordered pair of nodes.
///
/// `source` is always lexicographically smaller than `target`. The node
/// path runs from source to target inclusive; the edge path holds the
/// hops in walking order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathRecord {
    /// Smaller endpoint of the pair
    pub source: String,

    /// Larger endpoint of the pair
    pub target: String,

    /// Ordered nodes from source to target, endpoints included
    pub node_path: Vec<String>,

    /// Ordered hops as (from, to) edges
    pub edge_path: Vec<(String, String)>,
}
