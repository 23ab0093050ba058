//! Pipeline orchestration for the papergraph subcommands
//!
//! Each runner reads the configured inputs, optionally samples the
//! record stream, accumulates the graph, runs the requested
//! computation, and hands the assembled document to the output sink.

use crate::cli::Strategy;
use crate::ingest;
use crate::output;
use papergraph_common::config::AppConfig;
use papergraph_common::errors::Result;
use papergraph_common::record::PaperRecord;
use papergraph_graph::{
    assemble_citation, assemble_coauthor, AllPairsConfig, AllPairsEngine, BfsEngine,
    CitationGraphBuilder, CoauthorGraphBuilder, PathStyle, Sampler,
};
use tracing::info;

/// Counters reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Records accumulated into the graph
    pub records: usize,

    /// Malformed rows skipped during ingestion
    pub skipped: usize,

    /// Nodes in the final document
    pub nodes: usize,

    /// Edges in the final document
    pub edges: usize,

    /// Shortest-path records in the final document
    pub paths: usize,
}

/// Build the citation graph; `threshold` enables the degree filter
pub fn run_citation(
    config: &AppConfig,
    sample: bool,
    threshold: Option<usize>,
) -> Result<RunSummary> {
    let ingested = ingest::read_records(&config.input)?;
    let records = maybe_sample(config, sample, ingested.records);

    let mut builder = CitationGraphBuilder::new();
    builder.add_records(&records);

    let graph = match threshold {
        Some(threshold) => builder.finish_filtered(threshold),
        None => builder.finish(),
    };
    let document = assemble_citation(&graph);
    output::write_document(&config.output.path, &document)?;

    Ok(RunSummary {
        records: records.len(),
        skipped: ingested.skipped,
        nodes: document.nodes.len(),
        edges: document.edges.len(),
        paths: 0,
    })
}

/// Build the coauthor graph and its shortest-path records
pub fn run_coauthor(config: &AppConfig, strategy: Strategy, sample: bool) -> Result<RunSummary> {
    let ingested = ingest::read_records(&config.input)?;
    let records = maybe_sample(config, sample, ingested.records);

    let mut builder = CoauthorGraphBuilder::new(config.coauthor.include_self_pairs);
    builder.add_records(&records);
    let graph = builder.finish();

    let (paths, style) = match strategy {
        Strategy::FloydWarshall => {
            let engine = AllPairsEngine::new(AllPairsConfig {
                emit_unreachable: config.coauthor.emit_unreachable,
            });
            (engine.compute(&graph).records, PathStyle::Weighted)
        }
        Strategy::Bfs => (
            BfsEngine::new().compute(&graph.adjacency()),
            PathStyle::Traversal,
        ),
    };

    let document = assemble_coauthor(&graph, paths, style);
    output::write_document(&config.output.path, &document)?;

    Ok(RunSummary {
        records: records.len(),
        skipped: ingested.skipped,
        nodes: document.nodes.len(),
        edges: document.edges.len(),
        paths: document.shortest_path.len(),
    })
}

fn maybe_sample(config: &AppConfig, sample: bool, records: Vec<PaperRecord>) -> Vec<PaperRecord> {
    if !sample {
        return records;
    }
    let total = records.len();
    let mut sampler = Sampler::new(config.sampling.probability, config.sampling.seed);
    let kept: Vec<PaperRecord> = records.into_iter().filter(|_| sampler.keep()).collect();

    info!(
        total,
        kept = kept.len(),
        probability = config.sampling.probability,
        seed = config.sampling.seed,
        "records sampled"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::Write;

    fn config_with(dir: &std::path::Path, file_1: &str, file_2: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.input.data_file_1 = dir.join("a.csv").to_string_lossy().into_owned();
        config.input.data_file_2 = dir.join("b.csv").to_string_lossy().into_owned();
        config.input.authors_column = 0;
        config.input.title_column = 1;
        config.input.references_column = 2;
        config.output.path = dir.join("graph.json").to_string_lossy().into_owned();

        std::fs::File::create(&config.input.data_file_1)
            .unwrap()
            .write_all(file_1.as_bytes())
            .unwrap();
        std::fs::File::create(&config.input.data_file_2)
            .unwrap()
            .write_all(file_2.as_bytes())
            .unwrap();
        config
    }

    fn written_document(config: &AppConfig) -> serde_json::Value {
        let contents = std::fs::read_to_string(&config.output.path).unwrap();
        serde_json::from_str(&contents).unwrap()
    }

    #[test]
    fn test_citation_filtered_drops_rarely_citing_titles() {
        let dir = tempfile::tempdir().unwrap();
        // The hub cites eleven papers; two minor papers cite one title
        // each, so with threshold 10 only the hub survives
        let refs: Vec<String> = (0..11).map(|i| format!("Cited {} (2020)", i)).collect();
        let file_1 = format!(
            "x,Hub,\"{}\"\nx,Minor A,Popular (2019)\nx,Minor B,Popular (2019)\n",
            refs.join("; ")
        );
        let config = config_with(dir.path(), &file_1, "");

        let summary = run_citation(&config, false, Some(10)).unwrap();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.nodes, 1);
        assert_eq!(summary.edges, 0);

        let value = written_document(&config);
        assert_eq!(value["nodes"][0]["title"], "Hub");
        assert!(!value.to_string().contains("Popular"));
    }

    #[test]
    fn test_citation_unfiltered_keeps_all_titles() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(dir.path(), "x,A,B (1); C (2)\n", "x,B,C (2)\n");

        let summary = run_citation(&config, false, None).unwrap();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 3);
    }

    #[test]
    fn test_coauthor_weighted_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(
            dir.path(),
            "\"Alice, Bob\",t1,\n\"Bob, Carol\",t2,\n\"Alice, Carol\",t3,\n",
            "",
        );

        let mut config = config;
        config.coauthor.include_self_pairs = false;

        let summary = run_coauthor(&config, Strategy::FloydWarshall, false).unwrap();
        assert_eq!(summary.nodes, 3);
        assert_eq!(summary.edges, 3);
        assert_eq!(summary.paths, 3);

        let value = written_document(&config);
        let names: HashSet<String> = value["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|n| n["name"].as_str().unwrap().to_string())
            .collect();
        let expected: HashSet<String> = ["Alice", "Bob", "Carol"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, expected);

        // Every direct edge weighs 1; every shortest path is one hop
        for edge in value["edges"].as_array().unwrap() {
            assert_eq!(edge["weight"], 1);
        }
        for entry in value["shortest_path"].as_array().unwrap() {
            assert_eq!(entry["path"].as_array().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_coauthor_bfs_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(
            dir.path(),
            "\"Alice, Bob\",t1,\n\"Bob, Carol\",t2,\n\"Alice, Carol\",t3,\n",
            "",
        );

        let summary = run_coauthor(&config, Strategy::Bfs, false).unwrap();
        assert_eq!(summary.paths, 3);

        let value = written_document(&config);
        for entry in value["shortest_path"].as_array().unwrap() {
            let source = entry["source"].as_str().unwrap();
            let target = entry["target"].as_str().unwrap();
            assert!(source < target);
            assert_eq!(entry["edge_path"].as_array().unwrap().len(), 1);
            assert_eq!(entry["node_path"].as_array().unwrap().len(), 2);
        }
    }

    #[test]
    fn test_skipped_rows_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with(dir.path(), "short row\nx,A,B (1)\n", "");

        let summary = run_citation(&config, false, None).unwrap();
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.records, 1);
    }

    #[test]
    fn test_sampling_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let rows: String = (0..200).map(|i| format!("x,Paper {},\n", i)).collect();
        let mut config = config_with(dir.path(), &rows, "");
        config.sampling.probability = 0.5;
        config.sampling.seed = 42;

        let first = run_citation(&config, true, None).unwrap();
        let second = run_citation(&config, true, None).unwrap();
        assert_eq!(first, second);
        assert!(first.records < 200);
    }
}
