// =============================================================================
// Data Source — closing prices from a CSV export
// =============================================================================
//
// Reads one price per record from a fixed zero-based column. With
// `has_headers` the first record is skipped as the header row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::info;

/// Read the close column of the CSV file at `path`.
pub fn read_closes(path: impl AsRef<Path>, column: usize, has_headers: bool) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;

    let closes = read_closes_from_reader(file, column, has_headers)
        .with_context(|| format!("failed to read closes from {}", path.display()))?;

    info!(path = %path.display(), column, count = closes.len(), "closes loaded");
    Ok(closes)
}

/// Read the close column from any CSV source.
pub fn read_closes_from_reader<R: Read>(
    reader: R,
    column: usize,
    has_headers: bool,
) -> Result<Vec<f64>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut closes = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record_no = i + 1;
        let record = record.with_context(|| format!("malformed CSV record {}", record_no))?;

        let field = record
            .get(column)
            .with_context(|| format!("record {} has no column {}", record_no, column))?;

        let close = field
            .parse::<f64>()
            .with_context(|| format!("record {}: cannot parse {:?} as a number", record_no, field))?;
        closes.push(close);
    }

    Ok(closes)
}
