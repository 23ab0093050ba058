//! PaperGraph graph library
//!
//! Turns bibliographic records into two relationship graphs:
//! - a directed citation graph (paper cites paper), with an optional
//!   forward-degree filter
//! - an undirected weighted coauthor graph (weight = co-occurrence count)
//!
//! and computes shortest-path structures over the coauthor graph with two
//! interchangeable engines: all-pairs weighted (Floyd-Warshall with path
//! reconstruction) and repeated single-source unweighted BFS.
//!
//! All structures are built fresh per run from the full record set and
//! discarded after the output document is assembled. Node sets are hash
//! sets, so node/edge/path ordering in the assembled documents is not
//! deterministic across runs; consumers must treat the lists as unordered.

pub mod citation;
pub mod coauthor;
pub mod document;
pub mod extract;
pub mod pair;
pub mod sample;
pub mod shortest_path;

pub use citation::{CitationGraph, CitationGraphBuilder};
pub use coauthor::{CoauthorGraph, CoauthorGraphBuilder};
pub use document::{
    assemble_citation, assemble_coauthor, CitationDocument, CoauthorDocument, PathStyle,
};
pub use extract::extract_ref_title;
pub use pair::NodePair;
pub use sample::Sampler;
pub use shortest_path::{
    AllPairsConfig, AllPairsEngine, AllPairsResult, BfsEngine, ShortestPathRecord,
};
