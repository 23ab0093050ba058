//! Configuration management for the papergraph tools
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default, config/<env>, config/local)
//! - Default values

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Input source configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output sink configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Citation graph configuration
    #[serde(default)]
    pub citation: CitationConfig,

    /// Coauthor graph configuration
    #[serde(default)]
    pub coauthor: CoauthorConfig,

    /// Record sampling configuration
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// First paper meta CSV
    #[serde(default = "default_data_file_1")]
    pub data_file_1: String,

    /// Second paper meta CSV
    #[serde(default = "default_data_file_2")]
    pub data_file_2: String,

    /// Column holding the comma-delimited author list
    #[serde(default = "default_authors_column")]
    pub authors_column: usize,

    /// Column holding the paper title
    #[serde(default = "default_title_column")]
    pub title_column: usize,

    /// Column holding the semicolon-delimited reference list
    #[serde(default = "default_references_column")]
    pub references_column: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Path the graph document is written to
    #[serde(default = "default_output_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CitationConfig {
    /// Forward-degree threshold; nodes at or below it are dropped
    /// by the degree filter
    #[serde(default = "default_degree_threshold")]
    pub degree_threshold: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoauthorConfig {
    /// Count an author co-occurring with themself as an edge.
    /// Preserves the historical accumulation behavior; pending
    /// product-owner clarification.
    #[serde(default = "default_include_self_pairs")]
    pub include_self_pairs: bool,

    /// Emit all-pairs records for unconnected pairs at the
    /// sentinel distance instead of suppressing them
    #[serde(default = "default_emit_unreachable")]
    pub emit_unreachable: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Bernoulli keep-probability applied per record
    #[serde(default = "default_sample_probability")]
    pub probability: f64,

    /// RNG seed; runs are always reproducible
    #[serde(default = "default_sample_seed")]
    pub seed: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,
}

// Default value functions
fn default_data_file_1() -> String { "data/papers_1.csv".to_string() }
fn default_data_file_2() -> String { "data/papers_2.csv".to_string() }
fn default_authors_column() -> usize { 0 }
fn default_title_column() -> usize { 1 }
fn default_references_column() -> usize { 23 }
fn default_output_path() -> String { "graph.json".to_string() }
fn default_degree_threshold() -> usize { 10 }
fn default_include_self_pairs() -> bool { true }
fn default_emit_unreachable() -> bool { true }
fn default_sample_probability() -> f64 { 0.1 }
fn default_sample_seed() -> u64 { 42 }
fn default_log_level() -> String { "info".to_string() }
fn default_json_logging() -> bool { false }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_file_1: default_data_file_1(),
            data_file_2: default_data_file_2(),
            authors_column: default_authors_column(),
            title_column: default_title_column(),
            references_column: default_references_column(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self {
            degree_threshold: default_degree_threshold(),
        }
    }
}

impl Default for CoauthorConfig {
    fn default() -> Self {
        Self {
            include_self_pairs: default_include_self_pairs(),
            emit_unreachable: default_emit_unreachable(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            probability: default_sample_probability(),
            seed: default_sample_seed(),
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            output: OutputConfig::default(),
            citation: CitationConfig::default(),
            coauthor: CoauthorConfig::default(),
            sampling: SamplingConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config/default").required(false))
            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            // Load local overrides
            .add_source(File::with_name("config/local").required(false))
            // Load from environment variables with APP__ prefix
            // e.g., APP__CITATION__DEGREE_THRESHOLD=1
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
