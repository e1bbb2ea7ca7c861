//! File intake: read a payout CSV export into untyped rows.
//!
//! The first line is the header. Blank lines are skipped. Short rows are kept;
//! their missing trailing columns are simply absent from the row, and the
//! validator reports them as empty.

use payouts_core::{PayoutError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::types::RawRow;

/// Read CSV text (header row first) into raw rows.
pub fn read_raw_rows<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| PayoutError::MalformedFile(e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| PayoutError::MalformedFile(e.to_string()))?;

        // Whitespace-only line
        if record.len() == 1 && record.get(0).is_some_and(|s| s.trim().is_empty()) {
            continue;
        }

        rows.push(headers.iter().zip(record.iter()).collect::<RawRow>());
    }

    log::debug!("Read {} raw rows ({} columns)", rows.len(), headers.len());
    Ok(rows)
}

/// Open a `.csv` file and read it into raw rows.
pub fn read_csv_file(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        return Err(PayoutError::NotCsv(path.to_path_buf()));
    }

    let file = File::open(path)?;
    read_raw_rows(file)
}
