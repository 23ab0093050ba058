//! PaperGraph CLI
//!
//! One-shot batch runs: read the configured paper meta CSVs, build the
//! requested relationship graph, compute shortest paths where the
//! subcommand asks for them, and write one JSON document. A failure at
//! any stage aborts the run; no partial output is committed.

mod cli;
mod commands;
mod ingest;
mod output;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use papergraph_common::config::{AppConfig, ObservabilityConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Cli::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path),
        None => AppConfig::load(),
    }
    .context("failed to load configuration")?;

    if let Some(path) = &args.output {
        config.output.path = path.clone();
    }

    init_tracing(&config.observability);
    info!("Starting papergraph v{}", papergraph_common::VERSION);

    let summary = match args.command {
        Command::Citation {
            sample,
            filtered,
            min_degree,
        } => {
            let threshold = if filtered || min_degree.is_some() {
                Some(min_degree.unwrap_or(config.citation.degree_threshold))
            } else {
                None
            };
            commands::run_citation(&config, sample, threshold)
        }
        Command::Coauthor { strategy, sample } => {
            commands::run_coauthor(&config, strategy, sample)
        }
    }
    .context("run failed")?;

    info!(
        records = summary.records,
        skipped = summary.skipped,
        nodes = summary.nodes,
        edges = summary.edges,
        paths = summary.paths,
        "run complete"
    );
    Ok(())
}

/// Initialize tracing from the observability configuration; RUST_LOG
/// overrides the configured level
fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    if config.json_logging {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}
