//! Command-line surface for the papergraph binary

use clap::{Parser, Subcommand, ValueEnum};

/// Build citation and coauthor graphs from paper metadata
#[derive(Debug, Parser)]
#[command(name = "papergraph", version)]
pub struct Cli {
    /// Configuration file (TOML) overriding the default lookup
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Output path overriding the configured sink
    #[arg(long, global = true)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the directed citation graph
    Citation {
        /// Apply the seeded Bernoulli sampler before accumulation
        #[arg(long)]
        sample: bool,

        /// Drop nodes whose forward degree is at or below the
        /// configured threshold
        #[arg(long)]
        filtered: bool,

        /// Degree threshold override; implies --filtered
        #[arg(long = "min-degree")]
        min_degree: Option<usize>,
    },

    /// Build the undirected weighted coauthor graph with shortest paths
    Coauthor {
        /// Shortest-path strategy
        #[arg(long, value_enum, default_value = "floyd-warshall")]
        strategy: Strategy,

        /// Apply the seeded Bernoulli sampler before accumulation
        #[arg(long)]
        sample: bool,
    },
}

/// Shortest-path strategy for the coauthor graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// All-pairs weighted (Floyd-Warshall with path reconstruction)
    FloydWarshall,

    /// Single-source unweighted BFS repeated per node
    Bfs,
}
