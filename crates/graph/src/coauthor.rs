//! Coauthor graph construction
//!
//! Accumulates an undirected weighted graph of author collaboration.
//! Edges are keyed by canonical pair and weighted by the number of
//! co-occurrences across all records; the shortest-path engines later
//! convert a weight to a distance of 1/weight.

use crate::pair::NodePair;
use papergraph_common::record::PaperRecord;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Accumulator for the coauthor graph.
///
/// `include_self_pairs` controls the diagonal case of the pair loop:
/// the historical accumulation counted each author paired with themself
/// once per record. The toggle preserves that behavior by default while
/// it awaits product-owner clarification.
#[derive(Debug)]
pub struct CoauthorGraphBuilder {
    nodes: HashSet<String>,
    weights: HashMap<NodePair, u32>,
    include_self_pairs: bool,
}

impl Default for CoauthorGraphBuilder {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CoauthorGraphBuilder {
    /// Create an empty builder
    pub fn new(include_self_pairs: bool) -> Self {
        Self {
            nodes: HashSet::new(),
            weights: HashMap::new(),
            include_self_pairs,
        }
    }

    /// Accumulate one record: split the author field on commas, trim
    /// each name, and increment the canonical pair count for every
    /// unordered author pair on the paper.
    pub fn add_record(&mut self, record: &PaperRecord) {
        let authors: Vec<&str> = record
            .authors
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect();

        for i in 0..authors.len() {
            self.nodes.insert(authors[i].to_string());
            for j in i..authors.len() {
                if i == j && !self.include_self_pairs {
                    continue;
                }
                let pair = NodePair::new(authors[i], authors[j]);
                *self.weights.entry(pair).or_insert(0) += 1;
            }
        }
    }

    /// Accumulate a sequence of records
    pub fn add_records<'a>(&mut self, records: impl IntoIterator<Item = &'a PaperRecord>) {
        for record in records {
            self.add_record(record);
        }
    }

    /// Finish accumulation
    pub fn finish(self) -> CoauthorGraph {
        debug!(
            nodes = self.nodes.len(),
            edges = self.weights.len(),
            "coauthor graph built"
        );
        CoauthorGraph {
            nodes: self.nodes,
            weights: self.weights,
        }
    }
}

/// A finished coauthor graph: node set plus canonical-pair weights
#[derive(Debug, Clone)]
pub struct CoauthorGraph {
    nodes: HashSet<String>,
    weights: HashMap<NodePair, u32>,
}

impl CoauthorGraph {
    /// All author names
    pub fn nodes(&self) -> &HashSet<String> {
        &self.nodes
    }

    /// Edge weights keyed by canonical pair
    pub fn weights(&self) -> &HashMap<NodePair, u32> {
        &self.weights
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Weight of one unordered pair, 0 when the pair never co-occurred
    pub fn weight(&self, a: &str, b: &str) -> u32 {
        self.weights
            .get(&NodePair::new(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Undirected adjacency view for the BFS engine. Every node gets an
    /// entry; self-pairs contribute no neighbor.
    pub fn adjacency(&self) -> HashMap<String, Vec<String>> {
        let mut adjacency: HashMap<String, Vec<String>> = self
            .nodes
            .iter()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        for pair in self.weights.keys() {
            if pair.is_self_pair() {
                continue;
            }
            adjacency
                .entry(pair.small().to_string())
                .or_default()
                .push(pair.large().to_string());
            adjacency
                .entry(pair.large().to_string())
                .or_default()
                .push(pair.small().to_string());
        }

        adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(authors: &str) -> PaperRecord {
        PaperRecord::new("", authors, "")
    }

    fn builder_without_self_pairs() -> CoauthorGraphBuilder {
        CoauthorGraphBuilder::new(false)
    }

    #[test]
    fn test_triangle_weights() {
        let mut builder = builder_without_self_pairs();
        builder.add_records(&[record("Alice, Bob"), record("Bob, Carol"), record("Alice, Carol")]);

        let graph = builder.finish();
        let expected: HashSet<&str> = ["Alice", "Bob", "Carol"].into_iter().collect();
        let actual: HashSet<&str> = graph.nodes().iter().map(String::as_str).collect();
        assert_eq!(actual, expected);

        assert_eq!(graph.weight("Alice", "Bob"), 1);
        assert_eq!(graph.weight("Bob", "Carol"), 1);
        assert_eq!(graph.weight("Alice", "Carol"), 1);
    }

    #[test]
    fn test_unordered_pairs_aggregate() {
        let mut builder = builder_without_self_pairs();
        builder.add_record(&record("Alice, Bob"));
        builder.add_record(&record("Bob, Alice"));

        let graph = builder.finish();
        assert_eq!(graph.weights().len(), 1);
        assert_eq!(graph.weight("Bob", "Alice"), 2);
    }

    #[test]
    fn test_self_pairs_included_by_default() {
        let mut builder = CoauthorGraphBuilder::default();
        builder.add_record(&record("Alice, Bob"));

        let graph = builder.finish();
        assert_eq!(graph.weight("Alice", "Alice"), 1);
        assert_eq!(graph.weight("Bob", "Bob"), 1);
        assert_eq!(graph.weight("Alice", "Bob"), 1);
    }

    #[test]
    fn test_self_pairs_excluded_when_disabled() {
        let mut builder = builder_without_self_pairs();
        builder.add_record(&record("Alice, Bob"));

        let graph = builder.finish();
        assert_eq!(graph.weight("Alice", "Alice"), 0);
        assert_eq!(graph.weights().len(), 1);
    }

    #[test]
    fn test_names_are_trimmed_and_empties_skipped() {
        let mut builder = builder_without_self_pairs();
        builder.add_record(&record("  Alice ,Bob, "));

        let graph = builder.finish();
        assert!(graph.nodes().contains("Alice"));
        assert!(graph.nodes().contains("Bob"));
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_adjacency_is_undirected_with_all_nodes_present() {
        let mut builder = CoauthorGraphBuilder::default();
        builder.add_record(&record("Alice, Bob"));
        builder.add_record(&record("Dora"));

        let graph = builder.finish();
        let adjacency = graph.adjacency();

        assert_eq!(adjacency["Alice"], vec!["Bob".to_string()]);
        assert_eq!(adjacency["Bob"], vec!["Alice".to_string()]);
        // Isolated node present, self-pair contributes no neighbor
        assert!(adjacency["Dora"].is_empty());
    }
}
