//! Citation graph construction and degree filtering
//!
//! Accumulates a directed citation graph (paper cites paper) from
//! bibliographic records, together with a forward-adjacency table used
//! by the degree filter.

use crate::extract::extract_ref_title;
use papergraph_common::record::PaperRecord;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Accumulator for the citation graph.
///
/// Owns the node set, the directed edge list (duplicates allowed, one
/// edge per citing occurrence) and the forward-adjacency table. Built
/// fresh per run; there is no process-wide state.
#[derive(Debug, Default)]
pub struct CitationGraphBuilder {
    /// All paper titles seen, citing or cited
    nodes: HashSet<String>,

    /// Directed edges (citing title, cited title)
    edges: Vec<(String, String)>,

    /// Forward-adjacency: citing title -> titles it cites
    adjacency: HashMap<String, Vec<String>>,
}

impl CitationGraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one record: the record's title plus one directed edge
    /// per extractable reference title. References yielding an empty
    /// title are silently skipped.
    pub fn add_record(&mut self, record: &PaperRecord) {
        let title = record.title.clone();
        self.nodes.insert(title.clone());

        for reference in record.references.split(';') {
            let ref_title = extract_ref_title(reference);
            if ref_title.is_empty() {
                continue;
            }
            self.nodes.insert(ref_title.to_string());
            self.edges.push((title.clone(), ref_title.to_string()));
            self.adjacency
                .entry(title.clone())
                .or_default()
                .push(ref_title.to_string());
        }
    }

    /// Accumulate a sequence of records
    pub fn add_records<'a>(&mut self, records: impl IntoIterator<Item = &'a PaperRecord>) {
        for record in records {
            self.add_record(record);
        }
    }

    /// Forward degree of a title (0 when it cites nothing)
    pub fn forward_degree(&self, title: &str) -> usize {
        self.adjacency.get(title).map(|v| v.len()).unwrap_or(0)
    }

    /// Number of accumulated nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Finish without filtering
    pub fn finish(self) -> CitationGraph {
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "citation graph built"
        );
        CitationGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    /// Finish and drop every node whose forward degree is at or below
    /// `threshold`, along with every edge touching a dropped node.
    pub fn finish_filtered(self, threshold: usize) -> CitationGraph {
        let dropped: HashSet<&String> = self
            .nodes
            .iter()
            .filter(|title| {
                self.adjacency.get(*title).map(|v| v.len()).unwrap_or(0) <= threshold
            })
            .collect();

        let edges: Vec<(String, String)> = self
            .edges
            .iter()
            .filter(|(source, target)| !dropped.contains(source) && !dropped.contains(target))
            .cloned()
            .collect();

        let nodes: HashSet<String> = self
            .nodes
            .iter()
            .filter(|title| !dropped.contains(*title))
            .cloned()
            .collect();

        debug!(
            threshold,
            nodes = nodes.len(),
            edges = edges.len(),
            dropped = dropped.len(),
            "citation graph filtered"
        );
        CitationGraph { nodes, edges }
    }
}

/// A finished citation graph: node set plus directed edge list
#[derive(Debug, Clone)]
pub struct CitationGraph {
    nodes: HashSet<String>,
    edges: Vec<(String, String)>,
}

impl CitationGraph {
    /// All node titles
    pub fn nodes(&self) -> &HashSet<String> {
        &self.nodes
    }

    /// All directed edges as (citing, cited)
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
