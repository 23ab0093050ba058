//! PaperGraph Common Library
//!
//! Shared code for the papergraph tools including:
//! - Error types and handling
//! - Configuration management
//! - The bibliographic record model

pub mod config;
pub mod errors;
pub mod record;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use record::PaperRecord;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
