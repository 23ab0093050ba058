//! CSV record ingestion
//!
//! Maps rows of the configured paper meta CSVs to `PaperRecord`s via
//! the configured column indices. Rows that cannot be parsed or that
//! miss a required column are recoverable: they are skipped and
//! counted, and the count is reported at the end of the run. Unreadable
//! files are fatal.

use papergraph_common::config::InputConfig;
use papergraph_common::errors::{AppError, Result};
use papergraph_common::record::PaperRecord;
use std::fs::File;
use tracing::{info, warn};

/// Records read from all configured sources plus the skipped-row count
#[derive(Debug)]
pub struct IngestResult {
    /// Successfully parsed records, in source order
    pub records: Vec<PaperRecord>,

    /// Rows skipped as malformed
    pub skipped: usize,
}

/// Read both configured input files back to back
pub fn read_records(config: &InputConfig) -> Result<IngestResult> {
    let mut result = IngestResult {
        records: Vec::new(),
        skipped: 0,
    };
    for path in [&config.data_file_1, &config.data_file_2] {
        read_file(path, config, &mut result)?;
    }

    info!(
        records = result.records.len(),
        skipped = result.skipped,
        "input records ingested"
    );
    Ok(result)
}

fn read_file(path: &str, config: &InputConfig, result: &mut IngestResult) -> Result<()> {
    let file = File::open(path).map_err(|source| AppError::InputSource {
        path: path.to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let required = config
        .authors_column
        .max(config.title_column)
        .max(config.references_column);

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(path, error = %e, "skipping unparsable row");
                result.skipped += 1;
                continue;
            }
        };

        if row.len() <= required {
            warn!(path, columns = row.len(), "skipping short row");
            result.skipped += 1;
            continue;
        }

        result.records.push(PaperRecord::new(
            &row[config.title_column],
            &row[config.authors_column],
            &row[config.references_column],
        ));
    }

    Ok(())
}
