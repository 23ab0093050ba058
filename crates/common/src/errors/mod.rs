//! Error types for the papergraph tools
//!
//! Provides a single error enum shared by the graph library and the CLI,
//! with distinct variants for the failure modes a batch run can hit.
//! Malformed input rows are not errors: they are skipped and counted by
//! the ingest layer.

use thiserror::Error;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Failed to read input source {path}: {source}")]
    InputSource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output sink {path}: {source}")]
    OutputSink {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Configuration {
            message: e.to_string(),
        }
    }
}

impl AppError {
    /// Short machine-readable code for log fields
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Configuration { .. } => "CONFIGURATION_ERROR",
            AppError::InputSource { .. } => "INPUT_SOURCE_ERROR",
            AppError::OutputSink { .. } => "OUTPUT_SINK_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
