//! Output document assembly
//!
//! Composes the final JSON-shaped graph documents from a finished graph
//! and an optional shortest-path list. Node uniqueness is set-based and
//! the underlying sets carry no order, so list ordering in a document
//! is not deterministic across runs; consumers and tests must compare
//! the lists as unordered collections.

use crate::citation::CitationGraph;
use crate::coauthor::CoauthorGraph;
use crate::shortest_path::ShortestPathRecord;
use serde::Serialize;

/// Citation graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleNode {
    /// Paper title
    pub title: String,
}

/// Coauthor graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameNode {
    /// Author name
    pub name: String,
}

/// Unweighted directed or path edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Edge source
    pub source: String,

    /// Edge target
    pub target: String,
}

/// Weighted coauthor edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightedEdge {
    /// Edge source
    pub source: String,

    /// Edge target
    pub target: String,

    /// Co-occurrence count
    pub weight: u32,
}

/// Citation graph document: `{"nodes": [...], "edges": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct CitationDocument {
    /// Unique paper titles
    pub nodes: Vec<TitleNode>,

    /// Directed citation edges
    pub edges: Vec<Edge>,
}

/// Shape of one shortest-path entry in the coauthor document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// All-pairs weighted variant: `{source, target, path}`
    Weighted,

    /// BFS variant: `{source, target, node_path, edge_path}`
    Traversal,
}

/// One emitted shortest-path entry
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PathEntry {
    /// Edge-list path of the weighted all-pairs engine
    Weighted {
        source: String,
        target: String,
        path: Vec<Edge>,
    },

    /// Node and edge paths of the BFS engine
    Traversal {
        source: String,
        target: String,
        node_path: Vec<NameNode>,
        edge_path: Vec<Edge>,
    },
}

/// Coauthor graph document with shortest-path records
#[derive(Debug, Clone, Serialize)]
pub struct CoauthorDocument {
    /// Unique author names
    pub nodes: Vec<NameNode>,

    /// Undirected weighted edges, one per canonical pair
    pub edges: Vec<WeightedEdge>,

    /// One entry per emitted unordered pair
    pub shortest_path: Vec<PathEntry>,
}

/// Assemble the citation document from a (possibly filtered) graph
pub fn assemble_citation(graph: &CitationGraph) -> CitationDocument {
    CitationDocument {
        nodes: graph
            .nodes()
            .iter()
            .map(|title| TitleNode {
                title: title.clone(),
            })
            .collect(),
        edges: graph
            .edges()
            .iter()
            .map(|(source, target)| Edge {
                source: source.clone(),
                target: target.clone(),
            })
            .collect(),
    }
}

/// Assemble the coauthor document in the requested path style
pub fn assemble_coauthor(
    graph: &CoauthorGraph,
    paths: Vec<ShortestPathRecord>,
    style: PathStyle,
) -> CoauthorDocument {
    let nodes = graph
        .nodes()
        .iter()
        .map(|name| NameNode { name: name.clone() })
        .collect();

    let edges = graph
        .weights()
        .iter()
        .map(|(pair, &weight)| WeightedEdge {
            source: pair.small().to_string(),
            target: pair.large().to_string(),
            weight,
        })
        .collect();

    let shortest_path = paths
        .into_iter()
        .map(|record| match style {
            PathStyle::Weighted => PathEntry::Weighted {
                source: record.source,
                target: record.target,
                path: edge_list(&record.edge_path),
            },
            PathStyle::Traversal => PathEntry::Traversal {
                source: record.source,
                target: record.target,
                node_path: record
                    .node_path
                    .iter()
                    .map(|name| NameNode { name: name.clone() })
                    .collect(),
                edge_path: edge_list(&record.edge_path),
            },
        })
        .collect();

    CoauthorDocument {
        nodes,
        edges,
        shortest_path,
    }
}

fn edge_list(hops: &[(String, String)]) -> Vec<Edge> {
    hops.iter()
        .map(|(source, target)| Edge {
            source: source.clone(),
            target: target.clone(),
        })
        .collect()
}
