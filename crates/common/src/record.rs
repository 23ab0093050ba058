//! Bibliographic record model
//!
//! The already-parsed view of one input row. Field contents stay raw:
//! the graph builders own the splitting rules for author and reference
//! lists.

use serde::{Deserialize, Serialize};

/// One bibliographic record as handed over by the parsing collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Paper title
    pub title: String,

    /// Comma-delimited author list, as it appears in the source
    pub authors: String,

    /// Semicolon-delimited reference list, as it appears in the source
    pub references: String,
}

impl PaperRecord {
    /// Create a record from raw field values
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        references: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            references: references.into(),
        }
    }
}
