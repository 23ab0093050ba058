//! Output sink
//!
//! Serializes the assembled document and writes it to the configured
//! path in one shot. Serialization happens before the sink is touched,
//! so a failed run never commits partial output.

use papergraph_common::errors::{AppError, Result};
use serde::Serialize;
use tracing::info;

/// Serialize `document` as JSON and write it to `path`
pub fn write_document<T: Serialize>(path: &str, document: &T) -> Result<()> {
    let json = serde_json::to_string(document)?;
    std::fs::write(path, &json).map_err(|source| AppError::OutputSink {
        path: path.to_string(),
        source,
    })?;

    info!(path, bytes = json.len(), "graph document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Doc {
        nodes: Vec<String>,
    }

    #[test]
    fn test_document_round_trips_through_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        let doc = Doc {
            nodes: vec!["a".to_string()],
        };

        write_document(path.to_str().unwrap(), &doc).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["nodes"][0], "a");
    }

    #[test]
    fn test_unwritable_sink_is_fatal() {
        let err = write_document("/no/such/dir/graph.json", &Doc { nodes: vec![] }).unwrap_err();
        assert!(matches!(err, AppError::OutputSink { .. }));
    }
}
